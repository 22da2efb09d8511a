use crate::options::BookletOptions;
use crate::types::*;

/// Calculate statistics for a booklet made from `source_pages` pages.
///
/// In booklet mode (`signature == 0`) the whole document is a single
/// signature; otherwise pages are grouped into signatures of `signature` pages.
pub fn calculate_statistics(source_pages: usize, signature: u32) -> Result<BookletStatistics> {
    if source_pages == 0 {
        return Err(BookletError::NoPages);
    }

    if signature % 4 != 0 {
        return Err(BookletError::Config(
            "Pages per signature must be a multiple of 4".to_string(),
        ));
    }

    let pages_per_sig = if signature == 0 {
        source_pages.div_ceil(4) * 4
    } else {
        signature as usize
    };

    // Pad to multiple of pages_per_sig
    let padded_count = source_pages.div_ceil(pages_per_sig) * pages_per_sig;
    let blank_pages_added = padded_count - source_pages;

    let signatures = padded_count / pages_per_sig;
    let output_sheets = padded_count / 4;

    Ok(BookletStatistics {
        source_pages,
        output_sheets,
        signatures,
        pages_per_signature: pages_per_sig,
        output_pages: output_sheets * 2,
        blank_pages_added,
    })
}

/// Statistics for a PDF on disk imposed with `options`
pub async fn statistics_for(
    path: impl AsRef<std::path::Path>,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    let pages = crate::pipeline::count_pages(path).await?;
    calculate_statistics(pages, options.signature)
}
