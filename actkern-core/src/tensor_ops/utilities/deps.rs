/// Which forward pass tensors a backward formula reads.
///
/// This is a fixed property of each activation's math. The resolver consults
/// it to decide which slots must be bound for a backward pass, and which may
/// be missing because the forward pass overwrote them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ForwardDependency {
    /// The derivative is constant (zero almost everywhere).
    NoDeps = 0b00,
    /// The derivative is a function of `X`.
    NeedsInput = 0b01,
    /// The derivative is a function of `Out`.
    NeedsOutput = 0b10,
    /// Both `X` and `Out` must be bound. Only `abs` carries this tag.
    NeedsBoth = 0b11,
}

impl ForwardDependency {
    pub const fn needs_input(&self) -> bool {
        (*self as u8) & 0b01 != 0
    }

    pub const fn needs_output(&self) -> bool {
        (*self as u8) & 0b10 != 0
    }

    /// Whether the forward pass may overwrite `X` with `Out`.
    pub const fn supports_inplace(&self) -> bool {
        !self.needs_input()
    }
}

impl std::fmt::Display for ForwardDependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NoDeps => "no deps",
            Self::NeedsInput => "needs input",
            Self::NeedsOutput => "needs output",
            Self::NeedsBoth => "needs input and output",
        };
        f.write_str(name)
    }
}

/// The forward pass values a backward formula receives.
///
/// Built by the resolver from the op's [ForwardDependency], so a kernel never
/// sees a placeholder where the real input or output should be.
#[derive(Debug, Clone, Copy)]
pub enum Saved<T> {
    Nothing,
    Input(T),
    Output(T),
    InputAndOutput { input: T, output: T },
}

impl<T> Saved<T> {
    pub fn as_ref(&self) -> Saved<&T> {
        match self {
            Self::Nothing => Saved::Nothing,
            Self::Input(x) => Saved::Input(x),
            Self::Output(y) => Saved::Output(y),
            Self::InputAndOutput { input, output } => Saved::InputAndOutput { input, output },
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Saved<U> {
        match self {
            Self::Nothing => Saved::Nothing,
            Self::Input(x) => Saved::Input(f(x)),
            Self::Output(y) => Saved::Output(f(y)),
            Self::InputAndOutput { input, output } => Saved::InputAndOutput {
                input: f(input),
                output: f(output),
            },
        }
    }

    pub fn input(&self) -> Option<&T> {
        match self {
            Self::Input(x) | Self::InputAndOutput { input: x, .. } => Some(x),
            _ => None,
        }
    }

    pub fn output(&self) -> Option<&T> {
        match self {
            Self::Output(y) | Self::InputAndOutput { output: y, .. } => Some(y),
            _ => None,
        }
    }

    /// The value the derivative is computed from: the input when there is
    /// one, otherwise the output.
    pub fn primary(&self) -> Option<&T> {
        self.input().or_else(|| self.output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ForwardDependency::*;

    #[test]
    fn test_dependency_bits() {
        assert_eq!(
            [NoDeps, NeedsInput, NeedsOutput, NeedsBoth]
                .map(|d| (d.needs_input(), d.needs_output())),
            [(false, false), (true, false), (false, true), (true, true)]
        );
        assert!(NoDeps.supports_inplace());
        assert!(NeedsOutput.supports_inplace());
        assert!(!NeedsInput.supports_inplace());
        assert!(!NeedsBoth.supports_inplace());
    }

    #[test]
    fn test_saved_primary_prefers_input() {
        let s = Saved::InputAndOutput {
            input: 1,
            output: 2,
        };
        assert_eq!(s.primary(), Some(&1));
        assert_eq!(Saved::Output(2).primary(), Some(&2));
        assert_eq!(Saved::<i32>::Nothing.primary(), None);
        assert_eq!(s.map(|v| v * 10).output(), Some(&20));
    }
}
