//! Command line and environment configuration of the `fsoc` binary.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use fsoc_hashes::Sha1Hash;

use crate::harness::{Reference, DEMO_MESSAGE};

/// Environment variable supplying the expected digest when `--expect` is not given.
pub const EXPECT_ENV: &str = "FSOC_EXPECT";

pub const USAGE: &str = "\
usage: fsoc [OPTIONS] [MESSAGE]

Hashes MESSAGE (or the demo message if none is given) and compares the digest to a reference.

options:
    -f, --file <PATH>     hash the contents of PATH instead of MESSAGE
    -e, --expect <HEX>    reference digest, 40 hex digits (default: $FSOC_EXPECT or the demo digest)
    -x, --hex             print the digest as a single hex string
    -h, --help            print this help

exit status: 0 if the digest matches the reference, 1 if it does not, 2 on errors";

/// Where the message to hash comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    Demo,
    Inline(String),
    File(PathBuf),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// one hex word per line
    Words,
    Hex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: MessageSource,
    pub format: OutputFormat,
    pub expected: Option<Sha1Hash>,
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: MessageSource::Demo,
            format: OutputFormat::Words,
            expected: None,
            show_help: false,
        }
    }
}

impl Config {
    /// Read the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        let args = env::args_os()
            .skip(1)
            .map(|arg| {
                arg.into_string()
                    .map_err(|arg: OsString| anyhow!("argument {:?} is not valid unicode", arg))
            })
            .collect::<Result<Vec<_>>>()?;

        Config::parse(args, env::var(EXPECT_ENV).ok())
    }

    /// Parse ``args`` (without the program name). ``env_expect`` is used as the reference digest
    /// unless `--expect` is present.
    pub fn parse<I>(args: I, env_expect: Option<String>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut expect_arg = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => config.show_help = true,
                "-x" | "--hex" => config.format = OutputFormat::Hex,
                "-f" | "--file" => {
                    let path = args.next().with_context(|| format!("{} requires a path", arg))?;
                    config.set_source(MessageSource::File(path.into()))?;
                }
                "-e" | "--expect" => {
                    expect_arg = Some(args.next().with_context(|| format!("{} requires a digest", arg))?);
                }
                "--" => {
                    if let Some(message) = args.next() {
                        config.set_source(MessageSource::Inline(message))?;
                    }
                }
                flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown option {}", flag),
                _ => config.set_source(MessageSource::Inline(arg.clone()))?,
            }
        }

        if let Some(hex) = expect_arg.or(env_expect) {
            config.expected = Some(Sha1Hash::from_hex(&hex).context("invalid reference digest")?);
        }

        Ok(config)
    }

    fn set_source(&mut self, source: MessageSource) -> Result<()> {
        if self.source != MessageSource::Demo {
            bail!("only one message may be given");
        }
        self.source = source;
        Ok(())
    }

    /// The bytes to hash.
    pub fn load_message(&self) -> Result<Vec<u8>> {
        match &self.source {
            MessageSource::Demo => Ok(DEMO_MESSAGE.as_bytes().to_vec()),
            MessageSource::Inline(message) => Ok(message.as_bytes().to_vec()),
            MessageSource::File(path) => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))
            }
        }
    }

    pub fn reference(&self) -> Reference {
        self.expected.map(Reference::new).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::harness::DEMO_REFERENCE;

    use super::*;

    const EMPTY_DIGEST: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    fn parse(args: &[&str]) -> Result<Config> {
        Config::parse(args.iter().map(|arg| arg.to_string()), None)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.load_message().unwrap(), DEMO_MESSAGE.as_bytes());
        assert_eq!(config.reference().expected(), &DEMO_REFERENCE);
    }

    #[test]
    fn test_inline_message_and_flags() {
        let config = parse(&["--hex", "-e", EMPTY_DIGEST, "hello"]).unwrap();

        assert_eq!(config.source, MessageSource::Inline("hello".to_string()));
        assert_eq!(config.format, OutputFormat::Hex);
        assert_eq!(config.expected, Some(EMPTY_DIGEST.parse::<Sha1Hash>().unwrap()));
        assert_eq!(config.load_message().unwrap(), b"hello");
    }

    #[test]
    fn test_message_after_separator() {
        let config = parse(&["--", "--hex"]).unwrap();
        assert_eq!(config.source, MessageSource::Inline("--hex".to_string()));
        assert_eq!(config.format, OutputFormat::Words);

        assert_eq!(parse(&["-"]).unwrap().source, MessageSource::Inline("-".to_string()));
    }

    #[test]
    fn test_expected_digest_from_environment() {
        let from_env = Config::parse(Vec::<String>::new(), Some(EMPTY_DIGEST.to_string())).unwrap();
        assert_eq!(from_env.reference().expected(), &EMPTY_DIGEST.parse::<Sha1Hash>().unwrap());

        // the command line wins over the environment
        let overridden = Config::parse(
            vec!["--expect".to_string(), DEMO_REFERENCE.to_hex()],
            Some(EMPTY_DIGEST.to_string()),
        )
        .unwrap();
        assert_eq!(overridden.reference().expected(), &DEMO_REFERENCE);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["--file"]).is_err());
        assert!(parse(&["--expect"]).is_err());
        assert!(parse(&["--expect", "not-a-digest"]).is_err());
        assert!(parse(&["one", "two"]).is_err());
        assert!(parse(&["--file", "a", "b"]).is_err());
        assert!(Config::parse(Vec::<String>::new(), Some("abc".to_string())).is_err());
    }

    #[test]
    fn test_help() {
        assert!(parse(&["-h"]).unwrap().show_help);
    }

    #[test]
    fn test_load_message_from_file() {
        let path = env::temp_dir().join(format!("fsoc-config-test-{}", std::process::id()));
        fs::File::create(&path).unwrap().write_all(b"FSOC23/24 is fun!").unwrap();

        let config = parse(&["--file", path.to_str().unwrap()]).unwrap();
        assert_eq!(config.source, MessageSource::File(path.clone()));
        assert_eq!(config.load_message().unwrap(), DEMO_MESSAGE.as_bytes());

        fs::remove_file(&path).unwrap();
        assert!(config.load_message().is_err());
    }
}
