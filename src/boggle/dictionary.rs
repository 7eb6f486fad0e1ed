use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use super::error::{BoggleError, Result};
use super::scoring::Scorer;
use super::trie::Trie;
use super::util::letter_offset;
use super::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

pub type Transform = Arc<dyn Fn(&str) -> String + Send + Sync>;
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Acceptance policy applied to every dictionary line before it reaches the
/// trie: first `transform`, then `predicate` on the transformed word.
#[derive(Clone)]
pub struct WordPolicy {
    transform: Transform,
    predicate: Predicate,
    /// Multi-letter sequence folded into a single placeholder letter
    digraph: Option<(String, char)>,
}

impl fmt::Debug for WordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("WordPolicy")
            .field("digraph", &self.digraph)
            .finish_non_exhaustive()
    }
}

impl Default for WordPolicy {
    /// Words of 3 to 16 letters with "qu" stored as "q"
    fn default() -> Self {
        Self::with_length(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

impl WordPolicy {
    /// Fully custom policy. Words accepted this way are never expanded back by
    /// [`WordPolicy::restore`].
    pub fn new<T, P>(transform: T, predicate: P) -> Self
    where
        T: Fn(&str) -> String + Send + Sync + 'static,
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            transform: Arc::new(transform),
            predicate: Arc::new(predicate),
            digraph: None,
        }
    }

    /// Length bounds (inclusive, counted after the "qu" fold) with the default
    /// "qu" -> "q" transform
    pub fn with_length(min: usize, max: usize) -> Self {
        Self::with_digraph(min, max, Some(("qu", 'q')))
    }

    /// Length bounds plus an optional digraph that is folded into one letter
    pub fn with_digraph(min: usize, max: usize, digraph: Option<(&str, char)>) -> Self {
        let digraph = digraph.map(|(d, c)| (d.to_string(), c));
        let transform: Transform = match digraph.clone() {
            Some((seq, placeholder)) => {
                let placeholder = placeholder.to_string();
                Arc::new(move |w: &str| w.replace(&seq, &placeholder))
            }
            None => Arc::new(|w: &str| w.to_string()),
        };
        Self {
            transform,
            predicate: Arc::new(move |w: &str| (min..=max).contains(&w.chars().count())),
            digraph,
        }
    }

    pub fn transform(&self, word: &str) -> String {
        (self.transform)(word)
    }

    pub fn accepts(&self, word: &str) -> bool {
        (self.predicate)(word)
    }

    /// Wraps `scorer` so it sees words as spelled in the dictionary rather
    /// than in their folded form
    pub fn restoring(&self, scorer: Scorer) -> Scorer {
        if self.digraph.is_none() {
            return scorer;
        }
        let policy = self.clone();
        Arc::new(move |w: &str| scorer(&policy.restore(w)))
    }

    /// Undoes the digraph fold so a stored word can be shown to a player
    pub fn restore(&self, word: &str) -> String {
        match &self.digraph {
            Some((seq, placeholder)) => word.replace(*placeholder, seq),
            None => word.to_string(),
        }
    }

    /// Cleans one raw dictionary line. Returns `Ok(None)` for lines the
    /// policy rejects and `InvalidWord` for accepted lines holding anything
    /// other than `a`..=`z`.
    pub fn clean_line(&self, line: &str) -> Result<Option<String>> {
        let line = line.trim().to_lowercase();
        if line.is_empty() {
            return Ok(None);
        }
        // A bare placeholder would read back as the digraph on the board
        if let Some((seq, placeholder)) = &self.digraph {
            if line.replace(seq.as_str(), "").contains(*placeholder) {
                return Ok(None);
            }
        }
        let word = self.transform(&line);
        if !self.accepts(&word) {
            return Ok(None);
        }
        if word.chars().all(|c| letter_offset(c).is_some()) {
            Ok(Some(word))
        } else {
            Err(BoggleError::InvalidWord { word: line })
        }
    }
}

/// Runs every line through the policy. Invalid lines are skipped rather than
/// aborting the load.
pub fn clean_words<I>(lines: I, policy: &WordPolicy) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words = Vec::new();
    let mut n_invalid = 0;
    for line in lines {
        match policy.clean_line(line.as_ref()) {
            Ok(Some(word)) => words.push(word),
            Ok(None) => {}
            Err(e) => {
                n_invalid += 1;
                log::debug!("Skipping dictionary line: {}", e);
            }
        }
    }
    if n_invalid > 0 {
        log::info!("Skipped {} invalid dictionary lines", n_invalid);
    }
    words
}

/// Reads a newline delimited word list
pub fn read_words<R: BufRead>(reader: R, policy: &WordPolicy) -> Result<Vec<String>> {
    let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
    Ok(clean_words(lines, policy))
}

pub fn read_word_file<P: AsRef<Path>>(path: P, policy: &WordPolicy) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    read_words(BufReader::new(file), policy)
}

/// Applies the policy to raw lines and builds the index from what survives
pub fn build_trie<I>(lines: I, policy: &WordPolicy) -> Trie
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Trie::build(clean_words(lines, policy))
}

/// Loads a dictionary file straight into a trie
pub fn load_trie<P: AsRef<Path>>(path: P, policy: &WordPolicy) -> Result<Trie> {
    let words = read_word_file(path.as_ref(), policy)?;
    let trie = Trie::build(words);
    log::info!(
        "Loaded {} words ({} trie nodes) from {}",
        trie.word_count(),
        trie.node_count(),
        path.as_ref().display()
    );
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::boggle::scoring::{classic_score, classic_scorer};

    #[test]
    fn test_default_policy_length_bounds() {
        let policy = WordPolicy::default();
        assert_eq!(policy.clean_line("at").unwrap(), None);
        assert_eq!(policy.clean_line("cat").unwrap(), Some("cat".into()));
        assert_eq!(policy.clean_line(&"a".repeat(16)).unwrap(), Some("a".repeat(16)));
        assert_eq!(policy.clean_line(&"a".repeat(17)).unwrap(), None);
    }

    #[test]
    fn test_qu_is_folded() {
        let policy = WordPolicy::default();
        assert_eq!(policy.clean_line("Queen\r\n").unwrap(), Some("qeen".into()));
        assert_eq!(policy.restore("qeen"), "queen");
        // "quit" is three cells long once folded
        assert_eq!(policy.clean_line("quit").unwrap(), Some("qit".into()));
    }

    #[test]
    fn test_bare_q_words_are_skipped() {
        let policy = WordPolicy::default();
        assert_eq!(policy.clean_line("qat").unwrap(), None);
        assert_eq!(policy.clean_line("faqir").unwrap(), None);
        assert_eq!(policy.clean_line("quiq").unwrap(), None);
        assert_eq!(policy.clean_line("equip").unwrap(), Some("eqip".into()));

        let trie = build_trie(["qat", "qaid", "quay"], &policy);
        assert_eq!(trie.word_count(), 1);
        assert!(trie.contains("qay"));
        assert!(!trie.contains("qat"));

        // Without the fold a bare 'q' is an ordinary letter
        let policy = WordPolicy::with_digraph(3, 16, None);
        assert_eq!(policy.clean_line("qat").unwrap(), Some("qat".into()));
    }

    #[test]
    fn test_restoring_scorer() {
        let policy = WordPolicy::default();
        let scorer = policy.restoring(classic_scorer());
        // "qeen" is stored, "queen" is scored
        assert_eq!(scorer("qeen"), 2);
        assert_eq!(classic_score("qeen"), 1);

        let plain = WordPolicy::with_digraph(3, 16, None).restoring(classic_scorer());
        assert_eq!(plain("qeen"), 1);
    }

    #[test]
    fn test_invalid_characters() {
        let policy = WordPolicy::default();
        assert!(matches!(
            policy.clean_line("don't"),
            Err(BoggleError::InvalidWord { .. })
        ));
        assert!(matches!(
            policy.clean_line("café"),
            Err(BoggleError::InvalidWord { .. })
        ));
        // Too short to matter, so not an error
        assert_eq!(policy.clean_line("a'").unwrap(), None);
    }

    #[test]
    fn test_custom_policy() {
        let policy = WordPolicy::new(|w| w.chars().rev().collect(), |w| w.starts_with('t'));
        assert_eq!(policy.clean_line("cat").unwrap(), Some("tac".into()));
        assert_eq!(policy.clean_line("dog").unwrap(), None);
        assert_eq!(policy.restore("tac"), "tac");
    }

    #[test]
    fn test_no_digraph() {
        let policy = WordPolicy::with_digraph(2, 5, None);
        assert_eq!(policy.clean_line("quit").unwrap(), Some("quit".into()));
        assert_eq!(policy.restore("qat"), "qat");
    }

    #[test]
    fn test_read_words_skips_bad_lines() {
        let data = "cat\n\nit's\nAT\nzebra\nx\n";
        let words = read_words(Cursor::new(data), &WordPolicy::default()).unwrap();
        assert_eq!(words, vec!["cat".to_string(), "zebra".to_string()]);
    }

    #[test]
    fn test_build_trie() {
        let trie = build_trie(["cat", "cats", "at", "ca"], &WordPolicy::with_length(2, 16));
        assert_eq!(trie.word_count(), 4);
        assert!(trie.contains("ca"));
        let trie = build_trie(["cat", "cats", "at", "ca"], &WordPolicy::default());
        assert_eq!(trie.word_count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_trie("/definitely/not/a/dictionary.txt", &WordPolicy::default());
        assert!(matches!(err, Err(BoggleError::Io(_))));
    }
}
