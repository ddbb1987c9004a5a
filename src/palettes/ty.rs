/// A reference palette as stored in the static tables.
pub(crate) struct PaletteData {
    pub(crate) name: &'static str, // lowercase, unique
    pub(crate) rgb: &'static [[u8; 3]], // Invariant: length in 2 ..= 256
}
