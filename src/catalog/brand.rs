/// Vendor exports sometimes glue the model to the brand with one of these.
const SEPARATORS: [char; 3] = ['|', '/', '+'];

/// Extract the brand from a noisy registry field.
///
/// Tokens containing an ASCII digit are considered model codes and dropped. This also drops legitimate
/// alphanumeric brand tokens, which is a known source of noise in the dataset. The result may be
/// empty.
#[must_use]
pub fn clean_brand(raw: &str) -> String {
    let mut text = raw.trim().to_uppercase();
    for separator in SEPARATORS {
        if let Some((head, _)) = text.split_once(separator) {
            text = head.to_owned();
        }
    }
    text.split_whitespace()
        .filter(|token| !token.chars().any(|character| character.is_ascii_digit()))
        .collect::<Vec<_>>()
        .join(" ")
}
