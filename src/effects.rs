//! Declarative hover styling for the interactive elements.

pub type StyleRules = &'static [(&'static str, &'static str)];

/// Styles applied to a descendant of a hovered element.
#[derive(Debug)]
pub struct PartEffect {
    pub selector: &'static str,
    pub enter: StyleRules,
    pub leave: StyleRules,
}

#[derive(Debug)]
pub struct HoverEffect {
    pub selector: &'static str,
    pub enter: StyleRules,
    pub leave: StyleRules,
    pub parts: &'static [PartEffect],
}

pub const RIPPLE_SELECTOR: &str = ".btn-primary, .btn-ghost";
pub const TILT_SELECTOR: &str = ".project-card";

pub const HOVER_EFFECTS: &[HoverEffect] = &[
    HoverEffect {
        selector: ".btn-primary",
        enter: &[("box-shadow", "var(--glow-subtle)")],
        leave: &[("box-shadow", "var(--elevation-1)")],
        parts: &[],
    },
    HoverEffect {
        selector: ".btn-ghost",
        enter: &[("box-shadow", "var(--glow-subtle)")],
        leave: &[("box-shadow", "none")],
        parts: &[],
    },
    HoverEffect {
        selector: ".project-card",
        enter: &[
            ("transform", "translateY(-8px) scale(1.02)"),
            ("box-shadow", "var(--glow-subtle), var(--elevation-1)"),
        ],
        leave: &[
            ("transform", "perspective(1000px) rotateX(0) rotateY(0) translateY(0)"),
            ("box-shadow", "var(--elevation-1)"),
        ],
        parts: &[],
    },
    HoverEffect {
        selector: ".skill-badge",
        enter: &[
            ("transform", "scale(1.1) translateY(-2px)"),
            ("box-shadow", "var(--glow-subtle)"),
        ],
        leave: &[
            ("transform", "scale(1) translateY(0)"),
            ("box-shadow", "none"),
        ],
        parts: &[
            PartEffect {
                selector: ".skill-icon",
                enter: &[
                    ("transform", "rotate(5deg) scale(1.2)"),
                    ("color", "var(--accent-neon)"),
                ],
                leave: &[
                    ("transform", "rotate(0deg) scale(1)"),
                    ("color", "var(--primary-500)"),
                ],
            },
            PartEffect {
                selector: ".skill-label",
                enter: &[("color", "var(--primary-400)"), ("font-weight", "600")],
                leave: &[("color", "var(--primary-400)"), ("font-weight", "400")],
            },
        ],
    },
    HoverEffect {
        selector: ".project-link",
        enter: &[("transform", "scale(1.2)"), ("box-shadow", "var(--glow-primary)")],
        leave: &[("transform", "scale(1)"), ("box-shadow", "none")],
        parts: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn properties(rules: StyleRules) -> Vec<&'static str> {
        let mut names = rules.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    #[test]
    fn leave_restores_every_property_enter_touches() {
        for effect in HOVER_EFFECTS {
            assert_eq!(
                properties(effect.enter),
                properties(effect.leave),
                "{}",
                effect.selector
            );
            for part in effect.parts {
                assert_eq!(properties(part.enter), properties(part.leave), "{}", part.selector);
            }
        }
    }

    #[test]
    fn primary_and_ghost_buttons_relax_differently() {
        let leave_shadow = |selector: &str| {
            HOVER_EFFECTS
                .iter()
                .find(|effect| effect.selector == selector)
                .and_then(|effect| effect.leave.iter().find(|(name, _)| *name == "box-shadow"))
                .map(|(_, value)| *value)
        };

        assert_eq!(leave_shadow(".btn-primary"), Some("var(--elevation-1)"));
        assert_eq!(leave_shadow(".btn-ghost"), Some("none"));
    }
}
