use pdf_writer::{Content, Name, Pdf, Rect, Ref};

// A4 in points.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 24.0;

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
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

            row_h: 20.0,

            next_id,
            font_id,

            font_size: 9.0,
            header_font_size: 10.0,
            title_font_size: 14.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        rgb: (f32, f32, f32),
        text: &str,
    ) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(pdf_writer::Str(text.as_bytes()));
        content.end_text();
        content.restore_state();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(MARGIN, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        text_rgb: (f32, f32, f32),
    ) {
        let mut x = MARGIN;

        for (i, text) in row.iter().enumerate() {
            let w = col_widths[i];
            self.draw_text(content, x + 4.0, y + 6.0, font_size, text_rgb, text);
            self.draw_cell_borders(content, x, y, w, self.row_h);
            x += w;
        }
    }

    /// Column widths from header + content, scaled down to fit the page.
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = (cell.len() as f32 * 6.2).max(widths[i]);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = PAGE_W - 2.0 * MARGIN;

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_page_chrome(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            MARGIN,
            PAGE_H - MARGIN - self.title_font_size,
            self.title_font_size,
            (0.0, 0.0, 0.0),
            title,
        );

        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            PAGE_W - MARGIN - 50.0,
            10.0,
            self.font_size,
            (0.0, 0.0, 0.0),
            &pg,
        );
    }

    fn draw_header_row(&self, content: &mut Content, y: f32, col_widths: &[f32], headers: &[&str]) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        // Green fill with white text keeps the header visually distinct
        // from the banded body rows.
        self.fill_band(content, y, col_widths.iter().sum(), (0.30, 0.69, 0.31));
        self.draw_row(
            content,
            y,
            col_widths,
            &header_row,
            self.header_font_size,
            (1.0, 1.0, 1.0),
        );
    }

    /// A titled notice page without any table. Used for empty inputs.
    pub fn write_notice(&mut self, title: &str, notice: &str) {
        let mut content = self.new_page();
        self.draw_page_chrome(&mut content, title, 1);
        self.draw_text(
            &mut content,
            MARGIN,
            PAGE_H - MARGIN - self.title_font_size - 30.0,
            self.font_size,
            (0.0, 0.0, 0.0),
            notice,
        );
        self.finalize_page(content);
    }

    /// Titled, paginated table with the header row repeated on every page.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[Vec<String>]) {
        let col_widths = self.compute_col_widths(headers, rows);

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_chrome(&mut content, title, page_idx);

            let mut y = PAGE_H - MARGIN - self.title_font_size - 20.0 - self.row_h;

            self.draw_header_row(&mut content, y, &col_widths, headers);
            y -= self.row_h;

            let mut consumed = 0;

            for (i, row) in remaining.iter().enumerate() {
                if y < MARGIN {
                    break;
                }

                // zebra banding
                if i % 2 == 0 {
                    self.fill_band(&mut content, y, col_widths.iter().sum(), (0.96, 0.96, 0.96));
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size, (0.0, 0.0, 0.0));

                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    /// Finished document bytes. Catalog and page tree are built once, here.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}
