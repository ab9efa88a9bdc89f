use std::fmt;

use crate::binding::{BoundArgs, OperationKind};
use crate::diagnostics::WarningSink;
use crate::error::{Warning, WarningCode};
use crate::runtime::value::{Value, ValueKind};
use super::{Operation, convexity};

/// Subdivision scheme. The discriminant is what descriptions print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubdivisionType {
    #[default]
    CatmullClark = 0,
    Loop = 1,
    DooSabin = 2,
    Sqrt3 = 3,
}

impl SubdivisionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CatmullClark => "catmullclark",
            Self::Loop         => "loop",
            Self::DooSabin     => "doosabin",
            Self::Sqrt3        => "sqrt3",
        }
    }

    /// Case-insensitive; the two-word spellings may contain a space.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "catmullclark" | "catmull clark" => Some(Self::CatmullClark),
            "loop"                           => Some(Self::Loop),
            "doosabin" | "doo sabin"         => Some(Self::DooSabin),
            "sqrt3" | "sqrt 3"               => Some(Self::Sqrt3),
            _ => None,
        }
    }
}

/// Subdivision-surface refinement of the children.
#[derive(Debug, Clone, PartialEq)]
pub struct Subdivision {
    pub level: u32,
    pub subdivision: SubdivisionType,
    pub convexity: i32,
}

impl Default for Subdivision {
    fn default() -> Self {
        Self { level: 1, subdivision: SubdivisionType::CatmullClark, convexity: 0 }
    }
}

impl Operation for Subdivision {
    const KIND: OperationKind = OperationKind::Subdivision;

    fn build(args: &BoundArgs, sink: &mut dyn WarningSink) -> Self {
        let mut level = args.lookup("level", true, sink);
        let mut ty = args.lookup("type", false, sink);

        // accept subdiv("loop", 1) as well as subdiv(1, "loop")
        if level.kind() == ValueKind::String && ty.kind() == ValueKind::Number {
            std::mem::swap(&mut level, &mut ty);
        }

        let level = resolve_level(level, sink);
        let subdivision = resolve_type(ty, sink);

        Self { level, subdivision, convexity: convexity(args, sink) }
    }

    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f, "type = {}, level = {}, convexity = {}",
            self.subdivision as u8, self.level, self.convexity,
        )
    }
}

fn resolve_level(level: &Value, sink: &mut dyn WarningSink) -> u32 {
    if level.is_undefined() {
        return 1;
    }
    match u32::try_from(level.to_i32()) {
        Ok(n) => n,
        Err(_) => {
            sink.warn(Warning::new(
                WarningCode::W001,
                "Subdivision cannot be less than 0. Setting to 0.",
            ));
            0
        }
    }
}

fn resolve_type(ty: &Value, sink: &mut dyn WarningSink) -> SubdivisionType {
    if ty.is_undefined() {
        return SubdivisionType::CatmullClark;
    }
    let name = ty.to_text();
    match SubdivisionType::parse(&name) {
        Some(t) => t,
        None => {
            let name = name.to_lowercase();
            sink.warn(Warning::new(WarningCode::W002, format!("unknown subdivision type {name}")));
            sink.warn(Warning::new(WarningCode::W003, "setting to CatmullClark"));
            SubdivisionType::CatmullClark
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Argument, bind};
    use crate::diagnostics::CollectingSink;

    fn build(args: &[Argument]) -> (Subdivision, CollectingSink) {
        let mut sink = CollectingSink::default();
        let op = Subdivision::build(&bind(Subdivision::KIND.params(), args), &mut sink);
        (op, sink)
    }

    #[test]
    fn type_names_ignore_case_and_inner_space() {
        assert_eq!(SubdivisionType::parse("Catmull Clark"), Some(SubdivisionType::CatmullClark));
        assert_eq!(SubdivisionType::parse("LOOP"), Some(SubdivisionType::Loop));
        assert_eq!(SubdivisionType::parse("doo sabin"), Some(SubdivisionType::DooSabin));
        assert_eq!(SubdivisionType::parse("Sqrt 3"), Some(SubdivisionType::Sqrt3));
        assert_eq!(SubdivisionType::parse("sqrt  3"), None);
        assert_eq!(SubdivisionType::parse(" loop"), None);
    }

    #[test]
    fn canonical_names_parse_back() {
        for t in [
            SubdivisionType::CatmullClark, SubdivisionType::Loop,
            SubdivisionType::DooSabin, SubdivisionType::Sqrt3,
        ] {
            assert_eq!(SubdivisionType::parse(t.as_str()), Some(t));
        }
    }

    #[test]
    fn fractional_level_truncates() {
        let (op, sink) = build(&[Argument::named("level", 2.7)]);
        assert_eq!(op.level, 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn small_negative_level_truncates_to_zero_silently() {
        let (op, sink) = build(&[Argument::named("level", -0.5)]);
        assert_eq!(op.level, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn non_numeric_level_counts_as_zero() {
        let (op, _) = build(&[Argument::named("level", true)]);
        assert_eq!(op.level, 0);
    }

    #[test]
    fn two_strings_are_not_swapped() {
        let (op, sink) = build(&[Argument::positional("loop"), Argument::positional("sqrt3")]);
        assert_eq!(op.level, 0);
        assert_eq!(op.subdivision, SubdivisionType::Sqrt3);
        assert!(sink.is_empty());
    }

    #[test]
    fn numeric_type_is_unknown() {
        let (op, sink) = build(&[Argument::named("type", 2)]);
        assert_eq!(op.subdivision, SubdivisionType::CatmullClark);
        assert_eq!(sink.codes(), [WarningCode::W002, WarningCode::W003]);
        assert_eq!(sink.messages()[0], "unknown subdivision type 2");
    }

    #[test]
    fn unknown_type_is_reported_lower_cased() {
        let (op, sink) = build(&[Argument::named("type", "Banana Split")]);
        assert_eq!(op.subdivision, SubdivisionType::CatmullClark);
        assert_eq!(sink.messages()[0], "unknown subdivision type banana split");
    }

    #[test]
    fn mixed_case_type_resolves_without_warnings() {
        let (op, sink) = build(&[Argument::named("type", "DOO Sabin")]);
        assert_eq!(op.subdivision, SubdivisionType::DooSabin);
        assert!(sink.is_empty());
    }

    #[test]
    fn huge_level_saturates() {
        let (op, sink) = build(&[Argument::named("level", 1e12)]);
        assert_eq!(op.level, i32::MAX as u32);
        assert!(sink.is_empty());
    }

    #[test]
    fn huge_negative_level_clamps_once() {
        let (op, sink) = build(&[Argument::named("level", -1e12)]);
        assert_eq!(op.level, 0);
        assert_eq!(sink.codes(), [WarningCode::W001]);
    }

    #[test]
    fn convexity_after_swap() {
        let (op, _) = build(&[
            Argument::positional("doo sabin"),
            Argument::positional(3),
            Argument::positional(6),
        ]);
        assert_eq!(op, Subdivision { level: 3, subdivision: SubdivisionType::DooSabin, convexity: 6 });
    }
}
