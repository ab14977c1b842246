// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Average Helvetica glyph width relative to the font size.
const GLYPH_RATIO: f32 = 0.52;

/// Paginated report document: title, summary block, then a table that
/// continues over as many landscape A4 pages as needed.
pub struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,
    font_size: f32,
    title_size: f32,
}

impl Default for ReportPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,

            page_w: 842.0,
            page_h: 595.0,
            margin: 40.0,
            row_h: 18.0,
            font_size: 9.0,
            title_size: 14.0,
        }
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a finished page with its content stream.
    fn push_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        self.page_refs.push(page_id);

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
                .contents(content_id);
            page.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        self.pdf.stream(content_id, &content.finish());
    }

    fn text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        // Helvetica is declared with WinAnsiEncoding
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_row(&self, content: &mut Content, y: f32, width: f32, gray: f32) {
        content.save_state();
        content.set_fill_gray(gray);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], cells: &[String]) {
        let mut x = self.margin;
        for (cell, w) in cells.iter().zip(widths) {
            let fitted = fit(cell, *w - 6.0, self.font_size);
            Self::text(content, x + 3.0, y + 5.0, self.font_size, &fitted);
            x += w;
        }
    }

    /// Column widths from content length, scaled down to the page width.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let glyph = self.font_size * GLYPH_RATIO;
        let mut widths: Vec<f32> = headers.iter().map(|h| h.chars().count() as f32 * glyph + 8.0).collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = w.max(cell.chars().count() as f32 * glyph + 8.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let available = self.page_w - 2.0 * self.margin;
        if total > available {
            let scale = available / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    fn footer(&self, content: &mut Content, page: usize) {
        Self::text(
            content,
            self.page_w - self.margin - 50.0,
            self.margin / 2.0,
            self.font_size,
            &format!("Seite {page}"),
        );
    }

    pub fn write_report(
        &mut self,
        title: &str,
        summary: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let widths = self.column_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let mut remaining = rows;
        let mut page = 1;

        loop {
            let mut content = Content::new();
            let mut y = self.page_h - self.margin;

            if page == 1 {
                Self::text(&mut content, self.margin, y, self.title_size, title);
                y -= self.title_size + 8.0;
                for line in summary {
                    Self::text(&mut content, self.margin, y, self.font_size + 1.0, line);
                    y -= self.row_h;
                }
                y -= 6.0;
            }

            y -= self.row_h;
            self.fill_row(&mut content, y, table_w, 0.85);
            self.draw_row(&mut content, y, &widths, &header_cells);

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - self.row_h < self.margin {
                    break;
                }
                y -= self.row_h;
                if i % 2 == 0 {
                    self.fill_row(&mut content, y, table_w, 0.96);
                }
                self.draw_row(&mut content, y, &widths, row);
                consumed += 1;
            }

            self.footer(&mut content, page);
            self.push_page(content);

            remaining = &remaining[consumed..];
            if remaining.is_empty() {
                break;
            }
            page += 1;
        }
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let count = self.page_refs.len() as i32;
        self.pdf
            .pages(self.pages_id)
            .count(count)
            .kids(self.page_refs.iter().copied());

        self.pdf.finish()
    }
}

/// Cut `text` so it fits `width` points, marking the cut with "...".
fn fit(text: &str, width: f32, size: f32) -> String {
    let max = (width / (size * GLYPH_RATIO)).floor().max(0.0) as usize;
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - 3).collect();
    cut.push_str("...");
    cut
}
