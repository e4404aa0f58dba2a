use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use kcksum_corelib as core;
use kcksum_corelib::registry::{ChecksumType, Registry, RegistryOptions};

#[derive(Parser)]
#[command(name = "kcksum", version, about = "Checksum-type registry CLI")]
struct Cli {
    /// Include the flag-gated AES CBC-MAC types
    #[arg(long, global = true)]
    cbc_modes: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported checksum types
    List {
        /// Show aliases, strategy and length details
        #[arg(short, long)]
        verbose: bool,
        /// Emit the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compute a checksum over a message
    Compute {
        /// Checksum type, by name or numeric code
        #[arg(short = 't', long = "type")]
        cksum_type: String,
        /// Key material, hex-encoded (required for keyed types)
        #[arg(short, long)]
        key: Option<String>,
        /// Message bytes (taken verbatim)
        message: String,
    },
    /// Verify a checksum against a message
    Verify {
        /// Checksum type, by name or numeric code
        #[arg(short = 't', long = "type")]
        cksum_type: String,
        /// Key material, hex-encoded (required for keyed types)
        #[arg(short, long)]
        key: Option<String>,
        /// Candidate checksum, hex-encoded
        #[arg(short, long)]
        checksum: String,
        /// Message bytes (taken verbatim)
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let registry = Registry::builtin(RegistryOptions {
        with_cbc_modes: cli.cbc_modes,
    })
    .context("building checksum registry")?;

    match cli.command {
        Some(Commands::List { verbose, json }) => {
            if json {
                let infos: Vec<core::ChecksumInfo> =
                    registry.iter().map(core::ChecksumInfo::from).collect();
                println!("{}", serde_json::to_string_pretty(&infos)?);
            } else {
                for t in registry.iter() {
                    if verbose {
                        println!("{}  code={}", t.name, t.code);
                        println!("  description: {}", t.description);
                        println!("  strategy: {}", t.strategy.kind());
                        println!("  length: {} (native {})", t.trunc_len, t.output_len);
                        println!("  keyed: {}", t.is_keyed());
                        if t.flags.not_collision_proof {
                            println!("  warning: not collision-proof");
                        }
                        if !t.aliases.is_empty() {
                            println!("  aliases: {}", t.aliases.join(", "));
                        }
                    } else {
                        println!("{}  code={}  length={}", t.name, t.code, t.trunc_len);
                    }
                }
            }
        }
        Some(Commands::Compute {
            cksum_type,
            key,
            message,
        }) => {
            let t = resolve(&registry, &cksum_type)?;
            let key = parse_key(key.as_deref())?;
            let sum = t.compute(key.as_deref(), message.as_bytes())?;
            println!("{}", hex_encode(&sum));
        }
        Some(Commands::Verify {
            cksum_type,
            key,
            checksum,
            message,
        }) => {
            let t = resolve(&registry, &cksum_type)?;
            let key = parse_key(key.as_deref())?;
            let candidate = hex_decode(&checksum).context("parsing candidate checksum")?;
            let got = t.verify(key.as_deref(), message.as_bytes(), &candidate)?;
            if got.is_valid() {
                println!("valid");
            } else {
                println!("INVALID");
                std::process::exit(1);
            }
        }
        None => {
            println!("kcksum {} — ready", core::version());
            println!("Try: `kcksum list [-v]` or `kcksum compute -t crc32 <message>`");
        }
    }
    Ok(())
}

fn resolve<'r>(registry: &'r Registry, selector: &str) -> Result<&'r ChecksumType> {
    let found = match selector.parse::<i32>() {
        Ok(code) => registry.find_by_code(code),
        Err(_) => registry.find_by_name(selector),
    };
    found.map_err(|e| anyhow!(e))
}

fn parse_key(key: Option<&str>) -> Result<Option<Vec<u8>>> {
    key.map(|k| hex_decode(k).context("parsing key material"))
        .transpose()
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 {
        bail!("hex string has odd length");
    }
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(s.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let hi = hex_val(pair[0])?;
        let lo = hex_val(pair[1])?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn hex_val(b: u8) -> Result<u8> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => bail!("invalid hex digit '{}'", b as char),
    }
}
