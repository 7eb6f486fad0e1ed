use std::sync::Arc;

/// Value of a single found word. Receives the word as stored in the trie.
pub type Scorer = Arc<dyn Fn(&str) -> u32 + Send + Sync>;

/// One point per word
pub fn unit_score(_word: &str) -> u32 {
    1
}

/// Classic table: 3-4 letters 1, 5 letters 2, 6 letters 3, 7 letters 5,
/// 8 or more 11
pub fn classic_score(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

pub fn unit_scorer() -> Scorer {
    Arc::new(unit_score)
}

pub fn classic_scorer() -> Scorer {
    Arc::new(classic_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table() {
        assert_eq!(classic_score("at"), 0);
        assert_eq!(classic_score("cat"), 1);
        assert_eq!(classic_score("cats"), 1);
        assert_eq!(classic_score("tacos"), 2);
        assert_eq!(classic_score("planet"), 3);
        assert_eq!(classic_score("planets"), 5);
        assert_eq!(classic_score("triangles"), 11);
    }

    #[test]
    fn test_unit() {
        let scorer = unit_scorer();
        assert_eq!(scorer("anything"), 1);
    }
}
