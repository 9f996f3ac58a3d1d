//! PDF directory loader and metadata filter

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use edubot_core::{Document, Error, Result};

/// A single PDF page as produced by the loader, before metadata filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPage {
    pub text: String,
    pub source: String,
    pub page: u32,
}

/// Scan `dir` for PDF files and parse each into one `LoadedPage` per page.
///
/// Files are visited in path order so repeated runs over the same corpus
/// produce the same sequence. A missing directory fails with an IO error; a
/// file that cannot be parsed aborts the whole batch.
pub fn load_pdf_dir(dir: &Path) -> Result<Vec<LoadedPage>> {
    if !dir.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("PDF directory not found: {}", dir.display()),
        )));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<std::result::Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    paths.sort();

    let mut pages = Vec::new();

    for path in paths {
        let source = path.display().to_string();
        let pdf = lopdf::Document::load(&path)
            .map_err(|e| Error::PdfParse(format!("{source}: {e}")))?;

        for (page_number, _) in pdf.get_pages() {
            let text = pdf
                .extract_text(&[page_number])
                .map_err(|e| Error::PdfParse(format!("{source} page {page_number}: {e}")))?;

            pages.push(LoadedPage {
                text,
                source: source.clone(),
                page: page_number,
            });
        }

        tracing::debug!(source = %source, "loaded PDF");
    }

    Ok(pages)
}

/// Reduce loader output to `{text, source}` documents, dropping page numbers
/// and any other loader-specific metadata. Pure and total.
pub fn strip_page_metadata(pages: Vec<LoadedPage>) -> Vec<Document> {
    pages
        .into_iter()
        .map(|page| Document::new(page.text, page.source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{Document as PdfDocument, Object, Stream, dictionary};

    fn write_single_page_pdf(path: &Path, text: &str) {
        let mut doc = PdfDocument::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().unwrap(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let result = load_pdf_dir(Path::new("/definitely/not/a/real/dir"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn empty_directory_yields_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let pages = load_pdf_dir(dir.path()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn non_pdf_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "not a pdf").unwrap();
        let pages = load_pdf_dir(dir.path()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn single_page_pdf_loads_as_one_page() {
        let dir = tempfile::tempdir().unwrap();
        let pdf_path = dir.path().join("cell.pdf");
        write_single_page_pdf(
            &pdf_path,
            "The mitochondria is the powerhouse of the cell.",
        );

        let pages = load_pdf_dir(dir.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].text.contains("mitochondria"));
        assert_eq!(pages[0].source, pdf_path.display().to_string());
        assert_eq!(pages[0].page, 1);
    }

    #[test]
    fn corrupt_pdf_aborts_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.pdf"), b"%PDF-garbage").unwrap();
        let result = load_pdf_dir(dir.path());
        assert!(matches!(result, Err(Error::PdfParse(_))));
    }

    #[test]
    fn metadata_filter_keeps_text_and_source_only() {
        let pages = vec![
            LoadedPage {
                text: "page one".to_string(),
                source: "data/book.pdf".to_string(),
                page: 1,
            },
            LoadedPage {
                text: "page two".to_string(),
                source: "data/book.pdf".to_string(),
                page: 2,
            },
        ];

        let documents = strip_page_metadata(pages);
        assert_eq!(
            documents,
            vec![
                Document::new("page one", "data/book.pdf"),
                Document::new("page two", "data/book.pdf"),
            ]
        );
    }
}
