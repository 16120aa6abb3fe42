//! String Expansion Engine - Deterministic L-system rewriting
//!
//! Applies the grammar's production map to every character of the current
//! string, once per generation, while compounding the segment length by a
//! fixed ratio. Output length grows exponentially when replacements are
//! longer than one symbol; callers pick generation counts that keep the
//! result tractable (see the max_generations cap in config).

use crate::grammar::Grammar;

/// Fully expanded symbol string plus the compounded segment length
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub symbols: String,
    pub segment_length: f64,
}

/// Expand `grammar.start` through `generations` rewriting passes.
///
/// The running segment length starts at `base_length` and is multiplied
/// by `length_ratio` once per generation, independent of string content.
/// Pure function: same inputs, same output.
pub fn expand(
    grammar: &Grammar,
    generations: u32,
    length_ratio: f64,
    base_length: f64,
) -> Expansion {
    let mut symbols = grammar.start().to_string();
    let mut segment_length = base_length;

    for _ in 0..generations {
        segment_length *= length_ratio;

        let mut next = String::with_capacity(symbols.len() * 2);
        for c in symbols.chars() {
            match grammar.replacement(c) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(c),
            }
        }
        symbols = next;
    }

    Expansion {
        symbols,
        segment_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Action;

    fn dragon() -> Grammar {
        Grammar::new(
            "F",
            &[('F', "F+G"), ('G', "F-G")],
            &[
                ('F', Action::Draw),
                ('G', Action::Draw),
                ('+', Action::RotateRight),
                ('-', Action::RotateLeft),
            ],
            90.0,
        )
    }

    #[test]
    fn test_zero_generations_is_start() {
        let e = expand(&dragon(), 0, 0.5, 200.0);
        assert_eq!(e.symbols, "F");
        assert_eq!(e.segment_length, 200.0);
    }

    #[test]
    fn test_one_generation() {
        assert_eq!(expand(&dragon(), 1, 0.76, 200.0).symbols, "F+G");
    }

    #[test]
    fn test_two_generations() {
        // F -> F+G -> F+G + F-G
        assert_eq!(expand(&dragon(), 2, 0.76, 200.0).symbols, "F+G+F-G");
    }

    #[test]
    fn test_deterministic() {
        let a = expand(&dragon(), 8, 0.76, 200.0);
        let b = expand(&dragon(), 8, 0.76, 200.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_growth_compounds() {
        let shorter = expand(&dragon(), 1, 0.76, 200.0);
        let longer = expand(&dragon(), 2, 0.76, 200.0);
        assert!(longer.symbols.len() > shorter.symbols.len());
    }

    #[test]
    fn test_length_halves_per_generation() {
        let expected = [200.0, 100.0, 50.0, 25.0, 12.5, 6.25];
        for (generations, want) in expected.iter().enumerate() {
            let e = expand(&dragon(), generations as u32, 0.5, 200.0);
            assert_eq!(e.segment_length, *want);
        }
    }

    #[test]
    fn test_length_compounds_without_draw_symbols() {
        // Length scaling is per generation, not per symbol
        let g = Grammar::new("+", &[], &[('+', Action::RotateRight)], 90.0);
        assert_eq!(expand(&g, 3, 0.5, 80.0).segment_length, 10.0);
    }

    #[test]
    fn test_no_productions_is_fixed_point() {
        let g = Grammar::new("F-G-G", &[], &[('F', Action::Draw)], 120.0);
        assert_eq!(expand(&g, 7, 0.58, 200.0).symbols, "F-G-G");
    }

    #[test]
    fn test_empty_replacement_shrinks() {
        let g = Grammar::new("F-F", &[('F', "")], &[('-', Action::RotateLeft)], 90.0);
        assert_eq!(expand(&g, 1, 0.5, 200.0).symbols, "-");
    }

    #[test]
    fn test_unknown_symbols_pass_through() {
        let g = Grammar::new("AzB", &[('A', "AA")], &[], 90.0);
        assert_eq!(expand(&g, 1, 0.5, 200.0).symbols, "AAzB");
    }
}
