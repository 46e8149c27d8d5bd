//! Text analysis shared by the vector index.
//!
//! Lowercases, splits on Unicode word boundaries, drops single-character
//! tokens and English stop words, then expands to word n-grams. Word
//! boundaries keep apostrophes and inner periods ("prague's", "e.g"), so
//! those are split again into their alphanumeric runs.

use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
    "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well",
    "were", "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| ENGLISH_STOP_WORDS.iter().copied().collect())
}

/// Lowercase word tokens with stop words and single characters removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let stop_words = stop_words();

    lower
        .unicode_words()
        .flat_map(|word| word.split(|c: char| !c.is_alphanumeric() && c != '_'))
        .filter(|word| word.chars().count() > 1 && !stop_words.contains(word))
        .map(str::to_string)
        .collect()
}

/// Word n-grams of every length in `min_n..=max_n`, space-joined.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let min_n = min_n.max(1);
    let mut terms = Vec::new();

    for n in min_n..=max_n {
        if n > tokens.len() {
            break;
        }
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }

    terms
}

/// Tokenize and expand to n-gram terms in one step.
pub fn analyze(text: &str, min_n: usize, max_n: usize) -> Vec<String> {
    ngrams(&tokenize(text), min_n, max_n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_punctuation() {
        let tokens = tokenize("When was the Charles Bridge built?");
        assert_eq!(tokens, vec!["charles", "bridge", "built"]);
    }

    #[test]
    fn test_tokenize_splits_ranges_and_keeps_ordinals() {
        let tokens = tokenize("Built 1357-1402 in the 9th century, St. Vitus");
        assert_eq!(
            tokens,
            vec!["built", "1357", "1402", "9th", "century", "st", "vitus"]
        );
    }

    #[test]
    fn test_tokenize_splits_possessives() {
        let tokens = tokenize("Prague's most iconic landmark, the city’s castle");
        assert_eq!(tokens, vec!["prague", "iconic", "landmark", "city", "castle"]);
    }

    #[test]
    fn test_ngrams_ranges() {
        let tokens: Vec<String> = ["old", "town", "square"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let terms = ngrams(&tokens, 1, 3);

        assert_eq!(
            terms,
            vec![
                "old",
                "town",
                "square",
                "old town",
                "town square",
                "old town square"
            ]
        );
    }

    #[test]
    fn test_ngrams_longer_than_input() {
        let tokens = vec!["clock".to_string()];
        assert_eq!(ngrams(&tokens, 1, 3), vec!["clock"]);
        assert!(ngrams(&[], 1, 3).is_empty());
    }

    #[test]
    fn test_analyze_empty() {
        assert!(analyze("", 1, 3).is_empty());
        assert!(analyze("the of and", 1, 3).is_empty());
    }
}
