//! End-to-end: Markdown resume → document tree → paginated PDF.

const SAMPLE: &str = "\
# Jane Doe

Jane@x.com | [linkedin.com/in/jane](https://linkedin.com/in/jane) | 555-1234

## Experience

**Senior Engineer**
Acme Corp, San Francisco CA

- **Led** team of 5 engineers
- Shipped [the product](https://example.com/product) to 1M users

## Education

B.S. Computer Science, State University

## Skills

- Rust, Go, Python
";

#[test]
fn renders_single_page_pdf() {
    let document = resume_parser::parse(SAMPLE);
    let artifact = typst_engine::render(&document).unwrap();

    assert_eq!(&artifact.bytes[..5], b"%PDF-");
    assert_eq!(artifact.page_count, 1);
}

#[test]
fn generated_markup_compiles_with_header_box() {
    let document = resume_parser::parse(SAMPLE);
    let source = typst_engine::markup::typst_source(&document);
    assert_eq!(source.matches("#header-box[").count(), 1);

    // The wrapped source must stay a valid Typst program.
    let artifact = typst_engine::compiler::compile_pdf(&source).unwrap();
    assert!(artifact.page_count >= 1);
}

#[test]
fn rendering_is_deterministic_in_block_order() {
    let document = resume_parser::parse(SAMPLE);
    let a = typst_engine::markup::typst_source(&document);
    let b = typst_engine::markup::typst_source(&document);
    assert_eq!(a, b);
}

#[test]
fn special_characters_survive_rendering() {
    let document = resume_parser::parse("# Al O'Neill\n\nC/C++ developer, 50% faster builds #1 team\n");
    let artifact = typst_engine::render(&document).unwrap();
    assert_eq!(&artifact.bytes[..5], b"%PDF-");
}
