use glyphtex::{DocumentPlan, DocumentSpec, FilesystemGlyphCatalog, PipelineError};
use std::env;
use std::fs;

fn usage(program: &str) -> ! {
    eprintln!("Compiles SVG-subset glyphs into TikZ drawing directives.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!(
        "  {} <path/to/glyphs/> <path/to/document.json> <path/to/output.tex>",
        program
    );
    eprintln!("  {} preview <path/to/glyph.svg> <path/to/output.tex>", program);
    eprintln!();
    eprintln!("Set RUST_LOG=debug for parse and palette diagnostics.");
    std::process::exit(1);
}

/// Compiles every placement of a document against a directory of glyphs.
fn compile_document(glyph_dir: &str, document_path: &str) -> Result<String, PipelineError> {
    let catalog = FilesystemGlyphCatalog::new(glyph_dir);
    println!("Loading document from {}", document_path);
    let spec = DocumentSpec::from_json(&fs::read_to_string(document_path)?)?;

    println!("Collecting colors for {} placements...", spec.placements.len());
    let plan = DocumentPlan::prepare(spec, &catalog)?;
    println!("Palette has {} colors", plan.registry().len());

    let mut out = plan.palette()?;
    for gradient in &plan.spec().gradients {
        push_line(&mut out, &plan.shade(gradient)?);
    }
    push_line(&mut out, &plan.render_placements()?);
    Ok(out)
}

fn push_line(out: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(text);
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("glyphtex");
    if args.len() != 4 {
        usage(program);
    }

    let (tex, output_path) = if args[1] == "preview" {
        println!("Previewing glyph {}", args[2]);
        (glyphtex::preview(&fs::read_to_string(&args[2])?)?, &args[3])
    } else {
        (compile_document(&args[1], &args[2])?, &args[3])
    };

    fs::write(output_path, tex)?;
    println!("Successfully generated {}", output_path);
    Ok(())
}
