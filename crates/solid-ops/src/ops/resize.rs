use std::fmt;

use crate::binding::{BoundArgs, OperationKind};
use crate::diagnostics::WarningSink;
use crate::runtime::value::{Value, format_number};
use super::Operation;

/// Scale the children's bounding box to `new_size`. A zero component keeps
/// that axis unless the matching `auto_size` flag scales it proportionally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resize {
    pub new_size: [f64; 3],
    pub auto_size: [bool; 3],
}

impl Operation for Resize {
    const KIND: OperationKind = OperationKind::Resize;

    fn build(args: &BoundArgs, sink: &mut dyn WarningSink) -> Self {
        let new_size = fill3(args.lookup("newsize", true, sink), Value::to_f64);

        let auto = args.lookup("auto", true, sink);
        let auto_size = match auto {
            Value::Bool(b) => [*b; 3],
            other => fill3(other, Value::to_bool),
        };

        Self { new_size, auto_size }
    }

    fn write_params(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.new_size.map(format_number);
        let [a, b, c] = self.auto_size.map(u8::from);
        write!(f, "newsize = [{x},{y},{z}], auto = [{a},{b},{c}]")
    }
}

/// First three vector components through `coerce`; missing components and
/// non-vectors leave the default.
fn fill3<T: Copy + Default>(value: &Value, coerce: fn(&Value) -> T) -> [T; 3] {
    let mut out = [T::default(); 3];
    for (slot, item) in out.iter_mut().zip(value.to_vector()) {
        *slot = coerce(item);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::{Argument, bind};
    use crate::diagnostics::CollectingSink;

    fn build(args: &[Argument]) -> Resize {
        let mut sink = CollectingSink::default();
        let op = Resize::build(&bind(Resize::KIND.params(), args), &mut sink);
        assert!(sink.is_empty());
        op
    }

    #[test]
    fn extra_components_are_ignored() {
        let op = build(&[Argument::positional(Value::vector([1, 2, 3, 4]))]);
        assert_eq!(op.new_size, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn non_numeric_components_become_zero() {
        let op = build(&[Argument::positional(Value::vector([Value::from("a"), Value::from(5)]))]);
        assert_eq!(op.new_size, [0.0, 5.0, 0.0]);
    }

    #[test]
    fn scalar_newsize_is_ignored() {
        assert_eq!(build(&[Argument::positional(10)]).new_size, [0.0; 3]);
    }

    #[test]
    fn auto_false_broadcasts_false() {
        assert_eq!(build(&[Argument::named("auto", false)]).auto_size, [false; 3]);
    }

    #[test]
    fn auto_vector_components_use_truthiness() {
        let op = build(&[Argument::named("auto", Value::vector([Value::from(0), Value::from(1), Value::from("y")]))]);
        assert_eq!(op.auto_size, [false, true, true]);
    }

    #[test]
    fn auto_number_is_ignored() {
        assert_eq!(build(&[Argument::named("auto", 1)]).auto_size, [false; 3]);
    }
}
