//! Card assembly.

use homer_frinkiac::RendererUrls;
use homer_models::{CaptionSet, Frame, MemeCard};

use crate::text::{fits_overlay, wrap, WRAP_WIDTH};

/// Build a card for `frame`, or `None` when the quote can't be displayed.
///
/// Empty quotes and quotes that wrap past the overlay line limit are skipped.
pub fn build_card(
    urls: &RendererUrls,
    frame: &Frame,
    caption: &CaptionSet,
    quote: &str,
) -> Option<MemeCard> {
    let quote = quote.trim();
    if quote.is_empty() || !fits_overlay(quote) {
        return None;
    }

    let lines = wrap(quote, WRAP_WIDTH);

    Some(MemeCard {
        episode: frame.episode.clone(),
        timestamp: frame.timestamp,
        title: caption.title().to_string(),
        quote: quote.to_string(),
        meme_url: urls.meme_url(&frame.episode, frame.timestamp, &lines),
        image_url: urls.image_url(&frame.episode, frame.timestamp),
    })
}
