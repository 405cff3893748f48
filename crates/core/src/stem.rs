//! Word stemming for phrase normalization.
//!
//! Two stemmers are available:
//! - [`PorterStemmer`]: Porter's algorithm in the widely used NLTK-extensions
//!   variant. The labeled test pairs were built against these roots, so the
//!   extensions are kept.
//! - [`SuffixStemmer`]: the short suffix stripper used on the extraction side
//!   when the scored paths were produced.

use serde::{Deserialize, Serialize};

/// Reduces an inflected word to its root.
pub trait Stemmer {
  fn stem(&self, word: &str) -> String;
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
  fn stem(&self, word: &str) -> String {
    (**self).stem(word)
  }
}

impl<S: Stemmer + ?Sized> Stemmer for &S {
  fn stem(&self, word: &str) -> String {
    (**self).stem(word)
  }
}

/// Stemmer selection for configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
  #[default]
  Porter,
  Suffix,
}

impl StemmerKind {
  pub fn build(self) -> Box<dyn Stemmer> {
    match self {
      StemmerKind::Porter => Box::new(PorterStemmer::new()),
      StemmerKind::Suffix => Box::new(SuffixStemmer),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      StemmerKind::Porter => "porter",
      StemmerKind::Suffix => "suffix",
    }
  }
}

impl std::fmt::Display for StemmerKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for StemmerKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "porter" => Ok(StemmerKind::Porter),
      "suffix" => Ok(StemmerKind::Suffix),
      other => Err(format!("unknown stemmer '{}' (expected porter or suffix)", other)),
    }
  }
}

// ============================================================================
// Suffix stemmer
// ============================================================================

/// First-match suffix stripper: `sses`, `ies`, `s` (not `ss`), `ing`, `ed`.
///
/// Deliberately reproduces the extraction side byte for byte, including
/// `ies` becoming `ii` after the `ie` is cut (`ponies` -> `ponii`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixStemmer;

impl Stemmer for SuffixStemmer {
  fn stem(&self, word: &str) -> String {
    let s = word.to_lowercase();
    if s.chars().count() <= 2 {
      return s;
    }

    if let Some(rest) = s.strip_suffix("sses") {
      return format!("{}ss", rest);
    }
    if let Some(rest) = s.strip_suffix("ies") {
      return format!("{}ii", rest);
    }
    if !s.ends_with("ss")
      && let Some(rest) = s.strip_suffix('s')
    {
      return rest.to_string();
    }
    if let Some(rest) = s.strip_suffix("ing") {
      return rest.to_string();
    }
    if let Some(rest) = s.strip_suffix("ed") {
      return rest.to_string();
    }
    s
  }
}

// ============================================================================
// Porter stemmer
// ============================================================================

/// Irregular forms looked up before running the algorithm.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
  ("sky", "sky"),
  ("skies", "sky"),
  ("dying", "die"),
  ("lying", "lie"),
  ("tying", "tie"),
  ("news", "news"),
  ("innings", "inning"),
  ("inning", "inning"),
  ("outings", "outing"),
  ("outing", "outing"),
  ("cannings", "canning"),
  ("canning", "canning"),
  ("howe", "howe"),
  ("proceed", "proceed"),
  ("exceed", "exceed"),
  ("succeed", "succeed"),
];

type Condition = fn(&[char]) -> bool;

/// A suffix rewrite. When the suffix matches but the condition fails, no
/// later rule in the same list is tried.
struct Rule {
  suffix: &'static str,
  replacement: &'static str,
  condition: Option<Condition>,
}

const fn rule(suffix: &'static str, replacement: &'static str, condition: Option<Condition>) -> Rule {
  Rule {
    suffix,
    replacement,
    condition,
  }
}

const STEP1A_RULES: &[Rule] = &[
  rule("sses", "ss", None),
  rule("ies", "i", None),
  rule("ss", "ss", None),
  rule("s", "", None),
];

const STEP2_RULES: &[Rule] = &[
  rule("ational", "ate", Some(positive_measure)),
  rule("tional", "tion", Some(positive_measure)),
  rule("enci", "ence", Some(positive_measure)),
  rule("anci", "ance", Some(positive_measure)),
  rule("izer", "ize", Some(positive_measure)),
  rule("bli", "ble", Some(positive_measure)),
  rule("alli", "al", Some(positive_measure)),
  rule("entli", "ent", Some(positive_measure)),
  rule("eli", "e", Some(positive_measure)),
  rule("ousli", "ous", Some(positive_measure)),
  rule("ization", "ize", Some(positive_measure)),
  rule("ation", "ate", Some(positive_measure)),
  rule("ator", "ate", Some(positive_measure)),
  rule("alism", "al", Some(positive_measure)),
  rule("iveness", "ive", Some(positive_measure)),
  rule("fulness", "ful", Some(positive_measure)),
  rule("ousness", "ous", Some(positive_measure)),
  rule("aliti", "al", Some(positive_measure)),
  rule("iviti", "ive", Some(positive_measure)),
  rule("biliti", "ble", Some(positive_measure)),
  rule("fulli", "ful", Some(positive_measure)),
  // The 'l' stays with the stem so short stems like "geo" qualify.
  rule("logi", "log", Some(positive_measure_with_l)),
];

const STEP3_RULES: &[Rule] = &[
  rule("icate", "ic", Some(positive_measure)),
  rule("ative", "", Some(positive_measure)),
  rule("alize", "al", Some(positive_measure)),
  rule("iciti", "ic", Some(positive_measure)),
  rule("ical", "ic", Some(positive_measure)),
  rule("ful", "", Some(positive_measure)),
  rule("ness", "", Some(positive_measure)),
];

const STEP4_RULES: &[Rule] = &[
  rule("al", "", Some(measure_gt_1)),
  rule("ance", "", Some(measure_gt_1)),
  rule("ence", "", Some(measure_gt_1)),
  rule("er", "", Some(measure_gt_1)),
  rule("ic", "", Some(measure_gt_1)),
  rule("able", "", Some(measure_gt_1)),
  rule("ible", "", Some(measure_gt_1)),
  rule("ant", "", Some(measure_gt_1)),
  rule("ement", "", Some(measure_gt_1)),
  rule("ment", "", Some(measure_gt_1)),
  rule("ent", "", Some(measure_gt_1)),
  rule("ion", "", Some(measure_gt_1_ending_s_or_t)),
  rule("ou", "", Some(measure_gt_1)),
  rule("ism", "", Some(measure_gt_1)),
  rule("ate", "", Some(measure_gt_1)),
  rule("iti", "", Some(measure_gt_1)),
  rule("ous", "", Some(measure_gt_1)),
  rule("ive", "", Some(measure_gt_1)),
  rule("ize", "", Some(measure_gt_1)),
];

/// Porter stemmer, NLTK-extensions variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
  pub fn new() -> Self {
    Self
  }

  fn step1a(word: Vec<char>) -> Vec<char> {
    if word.len() == 4 && ends_with(&word, "ies") {
      return replace_suffix(&word, "ies", "ie");
    }
    apply_rules(word, STEP1A_RULES)
  }

  fn step1b(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "ied") {
      let replacement = if word.len() == 4 { "ie" } else { "i" };
      return replace_suffix(&word, "ied", replacement);
    }

    if ends_with(&word, "eed") {
      let stem = strip(&word, "eed");
      if measure(stem) > 0 {
        return replace_suffix(&word, "eed", "ee");
      }
      return word;
    }

    let stem = ["ed", "ing"]
      .into_iter()
      .find(|suffix| ends_with(&word, suffix))
      .map(|suffix| strip(&word, suffix))
      .filter(|stem| contains_vowel(stem));
    let Some(stem) = stem else {
      return word;
    };
    let stem = stem.to_vec();

    if ends_with(&stem, "at") || ends_with(&stem, "bl") || ends_with(&stem, "iz") {
      let mut out = stem;
      out.push('e');
      return out;
    }

    if ends_double_consonant(&stem) {
      let last = stem[stem.len() - 1];
      if matches!(last, 'l' | 's' | 'z') {
        return stem;
      }
      return stem[..stem.len() - 1].to_vec();
    }

    if measure(&stem) == 1 && ends_cvc(&stem) {
      let mut out = stem;
      out.push('e');
      return out;
    }
    stem
  }

  fn step1c(word: Vec<char>) -> Vec<char> {
    if !ends_with(&word, "y") {
      return word;
    }
    let stem = strip(&word, "y");
    if stem.len() > 1 && is_consonant(stem, stem.len() - 1) {
      return replace_suffix(&word, "y", "i");
    }
    word
  }

  fn step2(word: Vec<char>) -> Vec<char> {
    // alli -> al runs first and feeds its result back through step 2.
    if ends_with(&word, "alli") && positive_measure(strip(&word, "alli")) {
      return Self::step2(replace_suffix(&word, "alli", "al"));
    }
    apply_rules(word, STEP2_RULES)
  }

  fn step5a(word: Vec<char>) -> Vec<char> {
    if !ends_with(&word, "e") {
      return word;
    }
    let stem = strip(&word, "e");
    let m = measure(stem);
    if m > 1 || (m == 1 && !ends_cvc(stem)) {
      return stem.to_vec();
    }
    word
  }

  fn step5b(word: Vec<char>) -> Vec<char> {
    if ends_with(&word, "ll") && measure(&word[..word.len() - 1]) > 1 {
      return word[..word.len() - 1].to_vec();
    }
    word
  }
}

impl Stemmer for PorterStemmer {
  fn stem(&self, word: &str) -> String {
    let lowered = word.to_lowercase();

    // Irregular lookups and the short-word cutoff see the word as given.
    if let Some((_, root)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
      return (*root).to_string();
    }
    if word.chars().count() <= 2 {
      return lowered;
    }

    let mut chars: Vec<char> = lowered.chars().collect();
    chars = Self::step1a(chars);
    chars = Self::step1b(chars);
    chars = Self::step1c(chars);
    chars = Self::step2(chars);
    chars = apply_rules(chars, STEP3_RULES);
    chars = apply_rules(chars, STEP4_RULES);
    chars = Self::step5a(chars);
    chars = Self::step5b(chars);
    chars.into_iter().collect()
  }
}

fn apply_rules(word: Vec<char>, rules: &[Rule]) -> Vec<char> {
  for rule in rules {
    if ends_with(&word, rule.suffix) {
      let stem = strip(&word, rule.suffix);
      if rule.condition.is_none_or(|condition| condition(stem)) {
        return replace_suffix(&word, rule.suffix, rule.replacement);
      }
      return word;
    }
  }
  word
}

fn ends_with(word: &[char], suffix: &str) -> bool {
  let n = suffix.chars().count();
  word.len() >= n && word[word.len() - n..].iter().copied().eq(suffix.chars())
}

fn strip<'a>(word: &'a [char], suffix: &str) -> &'a [char] {
  &word[..word.len() - suffix.chars().count()]
}

fn replace_suffix(word: &[char], suffix: &str, replacement: &str) -> Vec<char> {
  strip(word, suffix).iter().copied().chain(replacement.chars()).collect()
}

fn is_consonant(word: &[char], i: usize) -> bool {
  match word[i] {
    'a' | 'e' | 'i' | 'o' | 'u' => false,
    'y' => i == 0 || !is_consonant(word, i - 1),
    _ => true,
  }
}

/// Number of vowel-consonant transitions, Porter's `m`.
fn measure(stem: &[char]) -> usize {
  let kinds: Vec<bool> = (0..stem.len()).map(|i| is_consonant(stem, i)).collect();
  kinds.windows(2).filter(|w| !w[0] && w[1]).count()
}

fn positive_measure(stem: &[char]) -> bool {
  measure(stem) > 0
}

fn positive_measure_with_l(stem: &[char]) -> bool {
  let mut with_l = stem.to_vec();
  with_l.push('l');
  measure(&with_l) > 0
}

fn measure_gt_1(stem: &[char]) -> bool {
  measure(stem) > 1
}

fn measure_gt_1_ending_s_or_t(stem: &[char]) -> bool {
  measure(stem) > 1 && matches!(stem.last(), Some('s' | 't'))
}

fn contains_vowel(stem: &[char]) -> bool {
  (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(word: &[char]) -> bool {
  let n = word.len();
  n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

fn ends_cvc(word: &[char]) -> bool {
  let n = word.len();
  if n >= 3 {
    return is_consonant(word, n - 3)
      && !is_consonant(word, n - 2)
      && is_consonant(word, n - 1)
      && !matches!(word[n - 1], 'w' | 'x' | 'y');
  }
  n == 2 && !is_consonant(word, 0) && is_consonant(word, 1)
}
