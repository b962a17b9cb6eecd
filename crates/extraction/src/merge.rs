//! Lowering typed spans onto the whitespace tokens of the text

use movie_ner_core::{Label, TaggedToken};

use crate::candidates::TypedSpan;
use crate::text::strip_punctuation;

/// Every whitespace token of `text`, punctuation-stripped, labelled `O`
pub fn baseline(text: &str) -> Vec<TaggedToken> {
    text.split_whitespace()
        .map(|word| TaggedToken::outside(strip_punctuation(word)))
        .collect()
}

/// Apply typed spans to the tokens, in order
///
/// A token keeps the first label it receives. `B-` labels apply to every
/// `O` token with the same text; `I-` labels only where the previous token
/// already carries the same kind, so no continuation label is ever orphaned.
pub fn merge_spans(tokens: &mut [TaggedToken], spans: &[TypedSpan]) {
    for span in spans {
        for (word, label) in span.labelled_words() {
            apply_label(tokens, strip_punctuation(word), label);
        }
    }
}

fn apply_label(tokens: &mut [TaggedToken], key: &str, label: Label) {
    if key.is_empty() {
        return;
    }

    for idx in 0..tokens.len() {
        if !tokens[idx].label.is_outside() || !tokens[idx].text.eq_ignore_ascii_case(key) {
            continue;
        }
        let applies = match label {
            Label::Begin(_) => true,
            Label::Inside(kind) => idx > 0 && tokens[idx - 1].label.continues_into(kind),
            Label::Outside => false,
        };
        if applies {
            tokens[idx].label = label;
        }
    }
}
