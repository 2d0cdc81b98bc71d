//! A "dumb" XML driver that reads a glyph fragment and notifies a builder of tag events.
use crate::attributes::get_owned_attributes;
use crate::builder::{GlyphBuilder, Tag};
use crate::error::{Location, ParseError};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event as XmlEvent};

fn tag_of(name: &[u8]) -> Result<Tag, ParseError> {
    Ok(Tag::from_name(std::str::from_utf8(name)?))
}

fn start(
    e: &BytesStart<'_>,
    builder: &mut impl GlyphBuilder,
    location: Location,
) -> Result<Tag, ParseError> {
    let tag = tag_of(e.local_name().as_ref())?;
    let attributes = get_owned_attributes(e)?;
    builder.start_element(tag.clone(), attributes, location)?;
    Ok(tag)
}

/// Drives the parsing process, calling builder methods for each tag event.
///
/// Self-closing tags produce a start event followed by an end event, exactly
/// like an explicit open/close pair. Text, comments and processing
/// instructions are ignored.
pub fn parse_glyph_content(
    source: &str,
    builder: &mut impl GlyphBuilder,
) -> Result<(), ParseError> {
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(false);
    let mut buf = Vec::new();

    loop {
        let pos = reader.buffer_position();
        let location = || Location::from_pos(source, pos as usize);
        match reader.read_event_into(&mut buf)? {
            XmlEvent::Start(e) => {
                start(&e, builder, location())?;
            }
            XmlEvent::Empty(e) => {
                let tag = start(&e, builder, location())?;
                builder.end_element(tag, location())?;
            }
            XmlEvent::End(e) => {
                let tag = tag_of(e.local_name().as_ref())?;
                builder.end_element(tag, location())?;
            }
            XmlEvent::Eof => break,
            _ => (),
        }
        buf.clear();
    }

    Ok(())
}
