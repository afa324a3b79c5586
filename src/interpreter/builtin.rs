/// Defines the built-in functions from a single table.
///
/// Each entry provides the callable name, the `Builtin` variant and the `f64`
/// method implementing it. The macro produces:
/// - the closed `Builtin` enum,
/// - `BUILTIN_FUNCTIONS` (the list of names seeded into every symbol table),
/// - name lookup and the single dispatch function `Builtin::apply`.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident : $func:path
        ),* $(,)?
    ) => {
        /// A unary numeric function available to every parser instance.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Builtin {
            $(
                #[doc = concat!("`", $name, "(x)`")]
                $variant,
            )*
        }

        /// Names of all built-in functions, in declaration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl Builtin {
            /// Looks up a built-in by its callable name. Names are case
            /// sensitive.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The callable name of the built-in.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            /// Applies the built-in to `x`.
            ///
            /// Out-of-domain inputs follow IEEE 754 and yield NaN or an
            /// infinity; the parser decides what to do with those.
            ///
            /// # Example
            /// ```
            /// use linecalc::interpreter::builtin::Builtin;
            ///
            /// assert_eq!(Builtin::Sqrt.apply(16.0), 4.0);
            /// assert_eq!(Builtin::Log2.apply(8.0), 3.0);
            /// assert!(Builtin::Sqrt.apply(-1.0).is_nan());
            /// ```
            #[must_use]
            pub fn apply(self, x: f64) -> f64 {
                match self {
                    $(Self::$variant => $func(x),)*
                }
            }
        }
    };
}

builtin_functions! {
    "sin"   => Sin:   f64::sin,
    "cos"   => Cos:   f64::cos,
    "tan"   => Tan:   f64::tan,
    "tanh"  => Tanh:  f64::tanh,
    "sqrt"  => Sqrt:  f64::sqrt,
    "log2"  => Log2:  f64::log2,
    "log10" => Log10: f64::log10,
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
