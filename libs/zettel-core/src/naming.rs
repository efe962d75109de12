//! Random file names and blank templates for new cards.

use crate::source::CARD_EXTENSION;
use rand::Rng;
use std::path::Path;

const SYMBOLS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890";

/// Length of the random stem, without the extension.
pub const NAME_LENGTH: usize = 20;

/// Generate a random card file name such as `Xk3...q9.txt`.
pub fn generate_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let stem: String = (0..NAME_LENGTH)
        .map(|_| SYMBOLS[rng.gen_range(0..SYMBOLS.len())] as char)
        .collect();
    format!("{stem}.{CARD_EXTENSION}")
}

/// Generate a name that is not yet taken in `dir`.
pub fn unique_name<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> String {
    loop {
        let name = generate_name(rng);
        if !dir.join(&name).exists() {
            return name;
        }
    }
}

/// Blank four-line header with the date line filled in.
pub fn card_skeleton(date: &str) -> String {
    format!("\n\n{date}\n\n")
}
