use indicatif::{ProgressBar, ProgressStyle};
use rand::RngExt;

const ASCII_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Random ASCII-alphabetic string of exactly `len` characters.
pub fn random_letters(len: usize, rng: &mut impl RngExt) -> String {
    (0..len)
        .map(|_| ASCII_LETTERS[rng.random_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

pub fn make_progress_bar(total: Option<u64>) -> ProgressBar {
    let pb;
    let sty;
    match total {
        Some(total) => {
            pb = ProgressBar::new(total);
            sty = ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:40.cyan/blue}] {pos:>7}/{len:7} [{elapsed_precise}<{eta_precise} {per_sec:.green}] {msg}"
            )
            .unwrap()
            .progress_chars("█▓▒░");
        }
        None => {
            pb = ProgressBar::new_spinner();
            sty = ProgressStyle::with_template(
                "{spinner:.cyan} {pos:>7} [{elapsed_precise} {per_sec:.green}] {msg}",
            )
            .unwrap();
        }
    }
    pb.set_style(sty);
    pb
}
