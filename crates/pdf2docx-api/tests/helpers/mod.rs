#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use pdf2docx_api::setup::routes::build_router;
use pdf2docx_api::{AppState, ConversionHistory};
use pdf2docx_core::Config;
use pdf2docx_storage::{LocalStorage, Storage};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test application with its own temporary staging and output areas.
pub struct TestApp {
    pub server: TestServer,
    pub state: Arc<AppState>,
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
    _root: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Number of files currently present in the given directory.
    pub fn file_count(dir: &PathBuf) -> usize {
        std::fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
    }
}

pub async fn setup_test_app() -> TestApp {
    let root = TempDir::new().expect("create temp dir");
    let upload_dir = root.path().join("uploads");
    let output_dir = root.path().join("converted");

    let config = Config::new(
        0,
        upload_dir.display().to_string(),
        output_dir.display().to_string(),
        vec!["*".to_string()],
        "test",
    );

    let staging: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&upload_dir)
            .await
            .expect("create staging area"),
    );
    let output: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(&output_dir)
            .await
            .expect("create output area"),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        staging,
        output,
        history: ConversionHistory::new(),
    });

    let router = build_router(&config, state.clone()).expect("build router");

    TestApp {
        server: TestServer::new(router).expect("start test server"),
        state,
        upload_dir,
        output_dir,
        _root: root,
    }
}

/// Upload `data` as the `pdf` multipart field with the given file name and
/// content type.
pub async fn upload(
    server: &TestServer,
    data: Vec<u8>,
    file_name: &str,
    content_type: &str,
) -> TestResponse {
    let form = MultipartForm::new().add_part(
        "pdf",
        Part::bytes(data)
            .file_name(file_name)
            .mime_type(content_type),
    );
    server.post("/api/convert").multipart(form).await
}

pub async fn upload_pdf(server: &TestServer, data: Vec<u8>, file_name: &str) -> TestResponse {
    upload(server, data, file_name, "application/pdf").await
}

/// Build a minimal one-page PDF whose extractable text is exactly `text`.
pub fn minimal_pdf(text: &str) -> Vec<u8> {
    build_minimal_pdf(text, 0)
}

/// Same as `minimal_pdf`, padded with a comment line so the file is at least
/// `min_size` bytes. Comment bytes are ignored by PDF parsers and do not
/// change the extractable text.
pub fn minimal_pdf_padded(text: &str, min_size: usize) -> Vec<u8> {
    let base_len = build_minimal_pdf(text, 0).len();
    build_minimal_pdf(text, min_size.saturating_sub(base_len))
}

fn build_minimal_pdf(text: &str, pad: usize) -> Vec<u8> {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)");
    let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", escaped);

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");

    if pad > 0 {
        out.push(b'%');
        out.extend(std::iter::repeat(b'x').take(pad));
        out.push(b'\n');
    }

    let mut offsets = Vec::new();
    for (i, obj) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, obj).as_bytes());
    }

    let xref_offset = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in &offsets {
        xref.push_str(&format!("{:010} 00000 n \n", offset));
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        )
        .as_bytes(),
    );

    out
}

/// Re-extract the text of a generated DOCX by reading its word/document.xml
/// entry and collecting the contents of `<w:t>` elements.
pub fn docx_text(data: &[u8]) -> String {
    let mut archive =
        zip::ZipArchive::new(std::io::Cursor::new(data)).expect("docx is a zip container");
    let mut entry = archive
        .by_name("word/document.xml")
        .expect("docx has word/document.xml");
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("document.xml is utf-8");

    let mut out = String::new();
    let mut rest = xml.as_str();
    while let Some(start) = rest.find("<w:t") {
        let after = &rest[start + 4..];
        // only <w:t> and <w:t attr...>, not <w:tbl> etc.
        if !after.starts_with('>') && !after.starts_with(' ') {
            rest = after;
            continue;
        }
        let Some(tag_end) = after.find('>') else { break };
        let body = &after[tag_end + 1..];
        let Some(end) = body.find("</w:t>") else { break };
        out.push_str(&body[..end]);
        rest = &body[end..];
    }

    out.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
}
