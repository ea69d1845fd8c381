//! Shared fixtures: in-memory PDF/DOCX builders and a test server.

#![allow(dead_code)]

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tokio::net::TcpListener;

/// Builds a PDF with one page per entry. An empty entry produces a page with
/// no text operators at all.
pub fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("save pdf");
    buf
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// Builds a DOCX with the given body paragraphs followed by tables, each table
/// given as rows of cell texts.
pub fn build_docx(paragraphs: &[&str], tables: &[Vec<Vec<&str>>]) -> Vec<u8> {
    let mut docx = Docx::new();
    for text in paragraphs {
        docx = docx.add_paragraph(text_paragraph(text));
    }
    for table in tables {
        let rows = table
            .iter()
            .map(|cells| {
                TableRow::new(
                    cells
                        .iter()
                        .map(|text| TableCell::new().add_paragraph(text_paragraph(text)))
                        .collect(),
                )
            })
            .collect();
        docx = docx.add_table(Table::new(rows));
    }
    pack_docx(docx)
}

/// Serializes a hand-built document to DOCX bytes.
pub fn pack_docx(docx: Docx) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).expect("pack docx");
    cursor.into_inner()
}

/// Serves the router on an ephemeral port and returns its base URL.
pub async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, doctext::create_router())
            .await
            .expect("test server");
    });

    format!("http://{}", addr)
}

pub async fn upload(base_url: &str, filename: &str, content: Vec<u8>) -> reqwest::Response {
    let part = reqwest::multipart::Part::bytes(content).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);

    reqwest::Client::new()
        .post(format!("{}/upload", base_url))
        .multipart(form)
        .send()
        .await
        .expect("upload request")
}
