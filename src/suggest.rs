//! Spelling suggestions driven by any [`Set`] of words.

use std::ops::RangeInclusive;

use crate::Set;

/// Letters tried by the insertion and replacement edits.
const ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Checks words against a set of known words and proposes alternatives
/// for misspellings.
///
/// The checker is a consumer of the [`Set`] contract: it holds a
/// `&dyn Set<String>` and only ever calls [`contains`](Set::contains), so
/// it works with any of the crate's containers and never mutates the set.
///
/// # Examples
///
/// ```
/// use sets::{BstSet, Set, WordChecker};
///
/// let mut words = BstSet::new();
/// words.insert("bat".to_string());
/// words.insert("cats".to_string());
///
/// let checker = WordChecker::new(&words);
///
/// assert!(checker.exists("bat"));
/// assert!(!checker.exists("cat"));
/// assert_eq!(checker.suggestions("cat"), ["cats", "bat"]);
/// ```
pub struct WordChecker<'a> {
    words: &'a dyn Set<String>,
}

impl<'a> WordChecker<'a> {
    /// Creates a checker over the given set of known words.
    pub fn new(words: &'a dyn Set<String>) -> Self {
        WordChecker { words }
    }

    /// Checks if the given word is known.
    pub fn exists(&self, word: &str) -> bool {
        self.words.contains(&word.to_string())
    }

    /// Produces the known words reachable from `word` by a single edit.
    ///
    /// Candidates are generated by swapping each adjacent pair of
    /// characters, inserting each letter of `'a'..='z'` at each position
    /// (both ends included), deleting each character, replacing each
    /// character with each letter, and splitting the word with a space
    /// between each adjacent pair of characters. A candidate is suggested
    /// when the set contains it and it has not been suggested already;
    /// the word itself is never suggested. Suggestions keep the order in
    /// which the edits produced them.
    ///
    /// # Examples
    ///
    /// ```
    /// use sets::{AvlSet, Set, WordChecker};
    ///
    /// let mut words = AvlSet::new();
    /// words.insert("at".to_string());
    /// words.insert("car".to_string());
    ///
    /// let checker = WordChecker::new(&words);
    /// assert_eq!(checker.suggestions("cat"), ["at", "car"]);
    /// ```
    pub fn suggestions(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found: Vec<String> = Vec::new();

        // Swap each adjacent pair of characters.
        for i in 1..chars.len() {
            let mut edit = chars.clone();
            edit.swap(i - 1, i);
            self.consider(word, edit.into_iter().collect(), &mut found);
        }

        // Insert each letter at each position, both ends included.
        for i in 0..=chars.len() {
            for letter in ALPHABET {
                let mut edit = chars.clone();
                edit.insert(i, letter);
                self.consider(word, edit.into_iter().collect(), &mut found);
            }
        }

        // Delete each character.
        for i in 0..chars.len() {
            let mut edit = chars.clone();
            edit.remove(i);
            self.consider(word, edit.into_iter().collect(), &mut found);
        }

        // Replace each character with each letter.
        for i in 0..chars.len() {
            for letter in ALPHABET {
                let mut edit = chars.clone();
                edit[i] = letter;
                self.consider(word, edit.into_iter().collect(), &mut found);
            }
        }

        // Split into two words with a space between each adjacent pair.
        for i in 1..chars.len() {
            let mut edit = chars.clone();
            edit.insert(i, ' ');
            self.consider(word, edit.into_iter().collect(), &mut found);
        }

        found
    }

    fn consider(&self, word: &str, candidate: String, found: &mut Vec<String>) {
        if candidate != word && !found.contains(&candidate) && self.words.contains(&candidate) {
            found.push(candidate);
        }
    }
}
