use crate::core::report::{Page, PageSpec};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes already laid-out pages into a PDF document.
///
/// Text is drawn with the built-in Helvetica font, which only covers
/// Latin-1. Any other character (e.g. `Ł`) is written as `?`, so such a
/// line differs from the text export.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    spec: PageSpec,
    font_size: f32,

    next_id: i32,
    font_id: Ref,
}

impl PdfManager {
    pub fn new(spec: PageSpec, font_size: f32) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,
            spec,
            font_size,
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a new page object and return its empty content stream.
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.spec.width, self.spec.height))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, text: &str) {
        let bytes = latin1_bytes(text);
        content.begin_text();
        content.set_font(Name(b"F1"), self.font_size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_footer(&self, content: &mut Content, page: usize, total: usize) {
        let label = format!("Page {} of {}", page, total);
        let y = (self.spec.margin_bottom / 2.0).max(self.font_size);
        self.draw_text(content, self.spec.width - self.spec.margin_left - 80.0, y, &label);
    }

    /// Draw every page; an empty slice still produces one blank page.
    pub fn write_pages(&mut self, pages: &[Page]) {
        if pages.is_empty() {
            let content = self.new_page();
            self.finalize_page(content);
            return;
        }

        let total = pages.len();
        for page in pages {
            let mut content = self.new_page();
            for line in &page.lines {
                self.draw_text(&mut content, line.x, line.y, &line.text);
            }
            self.draw_footer(&mut content, page.number, total);
            self.finalize_page(content);
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

/// Encode `text` for the built-in font: Latin-1 characters keep their byte,
/// anything else becomes `?`.
pub fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
