/// Splits a whitespace-normalized text into slices of at most `slice_length` words.
///
/// The trailing remainder is kept as a last, shorter slice. An empty text yields no slices.
///
/// # Example
/// ```
/// use keyword_census::utils::slice_words;
///
/// let slices = slice_words("eins zwei drei vier fünf", 2);
/// assert_eq!(slices, vec!["eins zwei", "drei vier", "fünf"]);
/// ```
pub fn slice_words(text: &str, slice_length: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() || slice_length == 0 {
        return Vec::new();
    }

    words
        .chunks(slice_length)
        .map(|chunk| chunk.join(" "))
        .collect()
}
