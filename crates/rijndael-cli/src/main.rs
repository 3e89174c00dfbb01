//! Command-line interface for `rijndael-core`.

#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{
    decrypt_stream_with_progress, encrypt_stream_with_progress, Cipher, KeySize, Padding,
    Progress,
};
use tracing::{debug, info, warn, Level};

/// Rijndael ECB CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Encrypt text and files with Rijndael (AES-128/192/256) in ECB mode"
)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeyArgs {
    /// Key string; shorter keys are left-padded with '0', longer keys keep their tail.
    #[arg(long, env = "RIJNDAEL_KEY", hide_env_values = true)]
    key: String,
    /// Key size in bits: 128, 192 or 256.
    #[arg(long, default_value = "128", value_parser = parse_key_size)]
    bits: KeySize,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a line of text (space padded), print the hex, then decrypt it back.
    Text {
        #[command(flatten)]
        key: KeyArgs,
        /// Text to encrypt.
        text: String,
    },
    /// Encrypt a file to `<stem>_encrypted<ext>`, then decrypt that to `<stem>_decrypted<ext>`.
    File {
        #[command(flatten)]
        key: KeyArgs,
        /// File to process.
        path: PathBuf,
    },
    /// Encrypt a file (zero padded).
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path; defaults to `<stem>_encrypted<ext>`.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt a file produced by `encrypt`.
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,
        /// Input ciphertext path (length must be a multiple of 16 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path; defaults to `<stem>_decrypted<ext>`.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Strip trailing zero bytes left by padding.
        #[arg(long, default_value_t = false)]
        trim_zero: bool,
    },
    /// Round-trip random data under a random key.
    Demo {
        /// Key size in bits: 128, 192 or 256.
        #[arg(long, default_value = "128", value_parser = parse_key_size)]
        bits: KeySize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Text { key, text } => cmd_text(&key, &text),
        Commands::File { key, path } => cmd_file(&key, &path),
        Commands::Encrypt { key, input, output } => cmd_encrypt(&key, &input, output),
        Commands::Decrypt {
            key,
            input,
            output,
            trim_zero,
        } => cmd_decrypt(&key, &input, output, trim_zero),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_text(args: &KeyArgs, text: &str) -> Result<()> {
    let cipher = build_cipher(args);

    let started = Instant::now();
    let ciphertext = cipher.encrypt(text.as_bytes(), Padding::Text);
    let encrypt_time = started.elapsed();

    let started = Instant::now();
    let recovered = cipher.decrypt(&ciphertext).context("decrypt text")?;
    let decrypt_time = started.elapsed();

    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", String::from_utf8_lossy(&recovered));
    info!(?encrypt_time, ?decrypt_time, "text done");
    Ok(())
}

fn cmd_file(args: &KeyArgs, path: &Path) -> Result<()> {
    let cipher = build_cipher(args);
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    info!(
        bytes = data.len(),
        pad = padded_len(data.len()) - data.len(),
        "encryption started"
    );

    let started = Instant::now();
    let ciphertext = encrypt_stream_with_progress(
        &data,
        cipher.round_keys(),
        Padding::Binary,
        progress_logger("encryption"),
    );
    let encrypt_time = started.elapsed();
    info!(?encrypt_time, "encryption done");

    let encrypted_path = output_path(path, "_encrypted");
    fs::write(&encrypted_path, &ciphertext)
        .with_context(|| format!("write {}", encrypted_path.display()))?;

    info!("decryption started");
    let started = Instant::now();
    let recovered =
        decrypt_stream_with_progress(&ciphertext, cipher.round_keys(), progress_logger("decryption"))
            .context("decrypt file")?;
    let decrypt_time = started.elapsed();
    info!(?decrypt_time, "decryption done");

    let decrypted_path = output_path(path, "_decrypted");
    fs::write(&decrypted_path, &recovered)
        .with_context(|| format!("write {}", decrypted_path.display()))?;

    println!("encrypted: {}", encrypted_path.display());
    println!("decrypted: {}", decrypted_path.display());
    Ok(())
}

fn cmd_encrypt(args: &KeyArgs, input: &Path, output: Option<PathBuf>) -> Result<()> {
    let cipher = build_cipher(args);
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let ciphertext = encrypt_stream_with_progress(
        &data,
        cipher.round_keys(),
        Padding::Binary,
        progress_logger("encryption"),
    );
    let output = output.unwrap_or_else(|| output_path(input, "_encrypted"));
    fs::write(&output, ciphertext).with_context(|| format!("write {}", output.display()))?;
    info!(path = %output.display(), "ciphertext written");
    Ok(())
}

fn cmd_decrypt(
    args: &KeyArgs,
    input: &Path,
    output: Option<PathBuf>,
    trim_zero: bool,
) -> Result<()> {
    let cipher = build_cipher(args);
    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let mut plaintext =
        decrypt_stream_with_progress(&data, cipher.round_keys(), progress_logger("decryption"))
            .with_context(|| format!("decrypt {}", input.display()))?;
    if trim_zero {
        let kept = trimmed_len(&plaintext);
        debug!(removed = plaintext.len() - kept, "trimmed zero padding");
        plaintext.truncate(kept);
    }
    let output = output.unwrap_or_else(|| output_path(input, "_decrypted"));
    fs::write(&output, plaintext).with_context(|| format!("write {}", output.display()))?;
    info!(path = %output.display(), "plaintext written");
    Ok(())
}

fn cmd_demo(size: KeySize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; size.key_len()];
    rng.fill_bytes(&mut key_bytes);
    let cipher = Cipher::new(&key_bytes, size);

    let len = 1 + (rng.next_u32() % 64) as usize;
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);

    let ciphertext = cipher.encrypt(&data, Padding::Binary);
    let mut decrypted = cipher.decrypt(&ciphertext).context("decrypt demo data")?;
    decrypted.truncate(data.len());

    println!("demo key ({size}): {}", hex::encode(&key_bytes));
    println!("plaintext: {}", hex::encode(&data));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != data {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn build_cipher(args: &KeyArgs) -> Cipher {
    let started = Instant::now();
    let cipher = Cipher::new(args.key.as_bytes(), args.bits);
    let schedule_time = started.elapsed();

    if cipher.fill_len() == args.bits.key_len() {
        warn!(size = %args.bits, "empty key; using a key made only of '0' fill characters");
    } else if cipher.fill_len() > 0 {
        warn!(
            size = %args.bits,
            fill = cipher.fill_len(),
            "key shorter than {} bytes; left-padded with '0'",
            args.bits.key_len()
        );
    }
    debug!(
        size = %cipher.size(),
        round_keys = cipher.round_keys().len(),
        ?schedule_time,
        "key schedule built"
    );
    cipher
}

fn parse_key_size(value: &str) -> std::result::Result<KeySize, String> {
    let bits: u16 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    KeySize::try_from(bits).map_err(|err| err.to_string())
}

/// Logs roughly every 1% of chunks.
fn progress_logger(label: &'static str) -> impl FnMut(Progress) {
    move |progress: Progress| {
        let step = progress_step(progress.total);
        if progress.chunk < progress.total && progress.chunk % step == 0 {
            info!("{label} progress: {:.2}%", progress.percent());
        }
    }
}

fn progress_step(total: usize) -> usize {
    total.div_ceil(100).max(1)
}

fn padded_len(len: usize) -> usize {
    rijndael_core::padded_chunks(len) * rijndael_core::BLOCK_SIZE
}

/// Length of `data` without its trailing zero bytes.
fn trimmed_len(data: &[u8]) -> usize {
    data.iter().rposition(|&b| b != 0).map_or(0, |idx| idx + 1)
}

/// `dir/name.ext` becomes `dir/name<suffix>.ext`.
fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = input.file_stem().unwrap_or_default().to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_inserts_suffix_before_extension() {
        assert_eq!(
            output_path(Path::new("dir/photo.png"), "_encrypted"),
            PathBuf::from("dir/photo_encrypted.png")
        );
        assert_eq!(
            output_path(Path::new("archive.tar.gz"), "_decrypted"),
            PathBuf::from("archive.tar_decrypted.gz")
        );
        assert_eq!(
            output_path(Path::new("README"), "_encrypted"),
            PathBuf::from("README_encrypted")
        );
    }

    #[test]
    fn key_size_parser_rejects_unknown_sizes() {
        assert_eq!(parse_key_size("192"), Ok(KeySize::Aes192));
        assert_eq!(parse_key_size(" 256 "), Ok(KeySize::Aes256));
        assert!(parse_key_size("512").is_err());
        assert!(parse_key_size("two").is_err());
    }

    #[test]
    fn trimmed_len_drops_only_trailing_zeros() {
        assert_eq!(trimmed_len(b"ab\0c\0\0"), 4);
        assert_eq!(trimmed_len(&[0u8; 16]), 0);
        assert_eq!(trimmed_len(b"abc"), 3);
    }

    #[test]
    fn progress_step_is_about_one_percent() {
        assert_eq!(progress_step(0), 1);
        assert_eq!(progress_step(50), 1);
        assert_eq!(progress_step(1000), 10);
        assert_eq!(progress_step(1001), 11);
    }

    #[test]
    fn padded_len_rounds_up_to_blocks() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 16);
        assert_eq!(padded_len(32), 32);
    }

    #[test]
    fn file_round_trip_through_zero_padding() {
        let cipher = Cipher::new(b"file key", KeySize::Aes192);
        let data = b"binary\0payload\x01\x02\x03".to_vec();
        let ct = encrypt_stream_with_progress(&data, cipher.round_keys(), Padding::Binary, |_| {});
        let mut pt =
            decrypt_stream_with_progress(&ct, cipher.round_keys(), |_| {}).unwrap();
        pt.truncate(trimmed_len(&pt));
        assert_eq!(pt, data);
    }

    #[test]
    fn cli_parses_env_free_arguments() {
        let cli = Cli::try_parse_from([
            "rijndael", "text", "--key", "abc", "--bits", "256", "hello",
        ])
        .unwrap();
        match cli.command {
            Commands::Text { key, text } => {
                assert_eq!(key.key, "abc");
                assert_eq!(key.bits, KeySize::Aes256);
                assert_eq!(text, "hello");
            }
            _ => panic!("expected text command"),
        }
        assert!(Cli::try_parse_from(["rijndael", "text", "--key", "k", "--bits", "100", "x"]).is_err());
    }
}
