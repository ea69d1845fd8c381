use docx_rs::{
    Break, BreakType, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCell, TableCellContent, TableChild, TableRowChild,
};
use serde_json::Value;

use crate::error::ExtractError;

const CELL_SEPARATOR: &str = " | ";
const BLOCK_SEPARATOR: &str = "\n\n";

/// Extracts body paragraphs followed by table rows from a DOCX document.
///
/// Paragraphs are trimmed and blank ones dropped. Each table row becomes its
/// trimmed cell texts joined by `" | "`, keeping empty cells. All blocks are
/// joined by a blank line, paragraphs first.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(content)
        .map_err(|e| ExtractError::Parse(format!("Invalid DOCX document: {}", e)))?;

    let children = &docx.document.children;

    let paragraphs = children.iter().filter_map(|child| match child {
        DocumentChild::Paragraph(paragraph) => {
            let text = paragraph_text(paragraph);
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    });

    let rows = children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Table(table) => Some(table_rows(table)),
            _ => None,
        })
        .flatten();

    Ok(paragraphs.chain(rows).collect::<Vec<_>>().join(BLOCK_SEPARATOR))
}

/// One text per grid column: a horizontally merged cell repeats for every
/// column it spans and a vertical-merge continuation repeats the cell above.
fn table_rows(table: &Table) -> Vec<String> {
    let mut rows = Vec::with_capacity(table.rows.len());
    let mut above: Vec<String> = Vec::new();

    for TableChild::TableRow(row) in &table.rows {
        let mut columns: Vec<String> = Vec::with_capacity(row.cells.len());
        for TableRowChild::TableCell(cell) in &row.cells {
            let merge = CellMerge::of(cell);
            let text = if merge.continues_above {
                above.get(columns.len()).cloned().unwrap_or_default()
            } else {
                cell_text(cell).trim().to_string()
            };
            columns.extend(std::iter::repeat(text).take(merge.grid_span));
        }
        rows.push(columns.join(CELL_SEPARATOR));
        above = columns;
    }
    rows
}

struct CellMerge {
    grid_span: usize,
    continues_above: bool,
}

impl CellMerge {
    // docx-rs keeps gridSpan/vMerge private; its serialized form exposes them
    fn of(cell: &TableCell) -> Self {
        let property = serde_json::to_value(&cell.property).unwrap_or(Value::Null);
        let grid_span = property
            .get("gridSpan")
            .and_then(Value::as_u64)
            .map_or(1, |span| span.max(1) as usize);
        let continues_above =
            property.get("verticalMerge").and_then(Value::as_str) == Some("continue");

        Self {
            grid_span,
            continues_above,
        }
    }
}

fn cell_text(cell: &TableCell) -> String {
    cell.children
        .iter()
        .filter_map(|content| match content {
            TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut buf = String::new();
    push_paragraph_children(&mut buf, &paragraph.children);
    buf
}

fn push_paragraph_children(buf: &mut String, children: &[ParagraphChild]) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(buf, run),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(buf, &link.children),
            _ => (),
        }
    }
}

fn push_run(buf: &mut String, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => buf.push_str(&text.text),
            RunChild::Tab(_) => buf.push('\t'),
            // page and column breaks carry no text
            RunChild::Break(br) if *br == Break::new(BreakType::TextWrapping) => buf.push('\n'),
            _ => (),
        }
    }
}
