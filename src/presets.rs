//! Built-in Fractal Presets
//!
//! The three shipped L-systems with their render parameters. This is
//! configuration data, not logic: each preset is a fixed (grammar,
//! generations, length ratio, start position) tuple chosen so the curve
//! fits a typical viewport.

use crate::grammar::{Action, Grammar};
use crate::vector::Vec2;

/// A shipped fractal: grammar plus fixed render parameters
#[derive(Debug, Clone)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub generations: u32,
    pub length_ratio: f64,
    /// Start position as a fraction of the viewport (x, y)
    pub start_frac: (f64, f64),
    pub grammar: Grammar,
}

impl Preset {
    /// Resolve the fractional start position against a viewport
    pub fn start_position(&self, width: f64, height: f64) -> Vec2 {
        Vec2::new(self.start_frac.0 * width, self.start_frac.1 * height)
    }

    /// Look up a preset by id ("plant", "dragon", "sierpinski")
    pub fn from_id(id: &str) -> Option<Preset> {
        all().into_iter().find(|p| p.id == id)
    }
}

/// Fractal Plant
/// Axiom: X, Rules: X → F+[[X]-X]-F[-FX]+X, F → FF, Angle: 25°
///
/// X drives the branching structure but draws nothing itself; the
/// brackets save and restore the turtle around each branch.
pub fn fractal_plant() -> Preset {
    Preset {
        id: "plant",
        name: "Fractal Plant",
        generations: 6,
        length_ratio: 0.52,
        start_frac: (0.5, 1.0),
        grammar: Grammar::new(
            "X",
            &[('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")],
            &[
                ('F', Action::Draw),
                ('+', Action::RotateRight),
                ('-', Action::RotateLeft),
                ('[', Action::PushState),
                (']', Action::PopState),
            ],
            25.0,
        ),
    }
}

/// Dragon Curve (Heighway Dragon)
/// Axiom: F, Rules: F → F+G, G → F-G, Angle: 90°
pub fn dragon_curve() -> Preset {
    Preset {
        id: "dragon",
        name: "Dragon Curve",
        generations: 14,
        length_ratio: 0.76,
        start_frac: (0.5, 0.5),
        grammar: Grammar::new(
            "F",
            &[('F', "F+G"), ('G', "F-G")],
            &[
                ('F', Action::Draw),
                ('G', Action::Draw),
                ('+', Action::RotateRight),
                ('-', Action::RotateLeft),
            ],
            90.0,
        ),
    }
}

/// Sierpinski Triangle
/// Axiom: F-G-G, Rules: F → F-G+F+G-F, G → GG, Angle: 120°
pub fn sierpinski_triangle() -> Preset {
    Preset {
        id: "sierpinski",
        name: "Sierpinski Triangle",
        generations: 6,
        length_ratio: 0.58,
        start_frac: (1.0, 1.0),
        grammar: Grammar::new(
            "F-G-G",
            &[('F', "F-G+F+G-F"), ('G', "GG")],
            &[
                ('F', Action::Draw),
                ('G', Action::Draw),
                ('+', Action::RotateRight),
                ('-', Action::RotateLeft),
            ],
            120.0,
        ),
    }
}

/// All shipped presets in display order
pub fn all() -> Vec<Preset> {
    vec![dragon_curve(), fractal_plant(), sierpinski_triangle()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite;
    use crate::walk::{self, BASE_LENGTH};

    #[test]
    fn test_from_id() {
        assert_eq!(Preset::from_id("dragon").unwrap().name, "Dragon Curve");
        assert_eq!(Preset::from_id("plant").unwrap().generations, 6);
        assert!(Preset::from_id("koch").is_none());
    }

    #[test]
    fn test_start_positions_resolve() {
        let dragon = dragon_curve();
        assert_eq!(
            dragon.start_position(1200.0, 800.0),
            Vec2::new(600.0, 400.0)
        );

        let sierpinski = sierpinski_triangle();
        assert_eq!(
            sierpinski.start_position(1200.0, 800.0),
            Vec2::new(1200.0, 800.0)
        );
    }

    // The shipped presets must walk to completion at their shipped
    // generation counts: brackets stay balanced and every draw symbol
    // yields exactly one segment.
    #[test]
    fn test_presets_walk_to_completion() {
        for preset in all() {
            let expansion = rewrite::expand(
                &preset.grammar,
                preset.generations,
                preset.length_ratio,
                BASE_LENGTH,
            );
            let draws = expansion
                .symbols
                .chars()
                .filter(|&c| preset.grammar.action(c) == Some(Action::Draw))
                .count();

            let segments = walk::trace(&expansion, &preset.grammar, Vec2::new(0.0, 0.0))
                .unwrap_or_else(|e| panic!("{} failed: {}", preset.id, e));

            assert_eq!(segments.len(), draws, "{}", preset.id);
            assert!(!segments.is_empty(), "{}", preset.id);
        }
    }

    #[test]
    fn test_plant_brackets_stay_balanced() {
        let plant = fractal_plant();
        let expansion =
            rewrite::expand(&plant.grammar, plant.generations, plant.length_ratio, BASE_LENGTH);

        let pushes = expansion.symbols.chars().filter(|&c| c == '[').count();
        let pops = expansion.symbols.chars().filter(|&c| c == ']').count();
        assert_eq!(pushes, pops);
        assert!(pushes > 0);
    }

    #[test]
    fn test_dragon_segment_count_doubles() {
        // 2^n draw symbols after n generations
        let dragon = dragon_curve();
        for generations in [1, 4, 8] {
            let segments = walk::generate_segments(
                &dragon.grammar,
                generations,
                dragon.length_ratio,
                Vec2::new(0.0, 0.0),
            )
            .unwrap();
            assert_eq!(segments.len(), 1 << generations);
        }
    }
}
