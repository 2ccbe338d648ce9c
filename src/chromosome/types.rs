//! Gene, alphabet and chromosome value types.

use crate::error::{PhaserError, Result};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// One optimisation step, identified by a single-character abbreviation.
///
/// The search never looks at what a step does; it only compares, copies
/// and renders genes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gene(char);

impl Gene {
    pub fn new(symbol: char) -> Self {
        Gene(symbol)
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed set of genes random operators draw from.
///
/// Always non-empty and free of duplicates, so a uniform draw is well
/// defined.
///
/// # Examples
///
/// ```
/// use u_phaser::chromosome::Alphabet;
///
/// let alphabet: Alphabet = "abc".parse().unwrap();
/// assert_eq!(alphabet.len(), 3);
/// assert!("".parse::<Alphabet>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    genes: Vec<Gene>,
}

impl Alphabet {
    /// Builds an alphabet from distinct symbols.
    ///
    /// Fails with a configuration error on an empty or repeating list.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut genes = Vec::new();
        for symbol in symbols {
            if !seen.insert(symbol) {
                return Err(PhaserError::Configuration(format!(
                    "alphabet contains '{symbol}' more than once"
                )));
            }
            genes.push(Gene(symbol));
        }
        if genes.is_empty() {
            return Err(PhaserError::Configuration("alphabet must not be empty".into()));
        }
        Ok(Self { genes })
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn contains(&self, gene: Gene) -> bool {
        self.genes.contains(&gene)
    }

    /// Draws one gene uniformly.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> Gene {
        self.genes[rng.random_range(0..self.genes.len())]
    }

    /// Parses a compact rendering such as `"fDxs"` into a chromosome,
    /// rejecting any symbol outside the alphabet.
    pub fn parse_chromosome(&self, text: &str) -> Result<Chromosome> {
        let genes = text
            .chars()
            .map(|c| {
                let gene = Gene(c);
                if self.contains(gene) {
                    Ok(gene)
                } else {
                    Err(PhaserError::UnknownGene(c))
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Chromosome::new(genes))
    }
}

impl FromStr for Alphabet {
    type Err = PhaserError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.chars())
    }
}

/// An ordered sequence of optimisation steps.
///
/// Immutable: operators in [`super::operators`] return new chromosomes.
/// The empty chromosome is a legal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }
}

/// Unchecked construction from symbols. Use
/// [`Alphabet::parse_chromosome`] when the input comes from outside.
impl From<&str> for Chromosome {
    fn from(symbols: &str) -> Self {
        Self::new(symbols.chars().map(Gene).collect())
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_alphabet_rejects_empty() {
        assert!(matches!(
            Alphabet::new(Vec::new()),
            Err(PhaserError::Configuration(_))
        ));
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        assert!("aba".parse::<Alphabet>().is_err());
    }

    #[test]
    fn test_random_gene_stays_in_alphabet() {
        let alphabet: Alphabet = "xyz".parse().unwrap();
        let mut rng = create_rng(42);
        for _ in 0..200 {
            assert!(alphabet.contains(alphabet.random_gene(&mut rng)));
        }
    }

    #[test]
    fn test_random_gene_covers_alphabet() {
        let alphabet: Alphabet = "xyz".parse().unwrap();
        let mut rng = create_rng(1);
        let seen: HashSet<Gene> = (0..300).map(|_| alphabet.random_gene(&mut rng)).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_parse_chromosome() {
        let alphabet: Alphabet = "abc".parse().unwrap();
        let c = alphabet.parse_chromosome("cab").unwrap();
        assert_eq!(c.to_string(), "cab");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_parse_chromosome_unknown_gene() {
        let alphabet: Alphabet = "abc".parse().unwrap();
        assert!(matches!(
            alphabet.parse_chromosome("de"),
            Err(PhaserError::UnknownGene('d'))
        ));
    }

    #[test]
    fn test_empty_chromosome_renders_empty() {
        let c = Chromosome::default();
        assert!(c.is_empty());
        assert_eq!(c.to_string(), "");
    }
}
