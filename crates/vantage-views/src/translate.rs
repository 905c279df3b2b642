///
/// Translator
///
/// Localization seam for display strings. Implementations translate the
/// template into the active language; the provided method substitutes
/// `{name}` placeholders from `args` after translation.
///

pub trait Translator {
    /// Translate `template`, then substitute placeholders.
    fn translate(&self, template: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.lookup(template);
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }

        out
    }

    /// Resolve the raw template for the active language.
    fn lookup(&self, template: &str) -> String {
        template.to_string()
    }
}

///
/// IdentityTranslator
///
/// Pass-through translator for environments without localization.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {}

///
/// TESTS
///
