// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/args.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file rewrites single-dash long flags ("-threads=4", "-tls") into the
// double-dash form clap expects, so existing csminer launch scripts keep
// working.
//
// Tree Location:
// - src/utils/args.rs (argument normalization)
// - Depends on: std

use std::ffi::OsString;

/// Long option names that may be given with a single dash
pub const LONG_FLAGS: &[&str] = &[
    "threads", "user", "rigid", "tls", "exclude", "config", "wallet", "saver", "dev", "help",
];

/// Options that consume the following argument as their value
const VALUE_FLAGS: &[&str] = &["threads", "user", "rigid", "exclude", "config", "wallet"];

/// Rewrite `-name` / `-name=value` to `--name` / `--name=value` for known names.
///
/// The first element (program name), the value following a value-taking
/// option, and anything after a bare `--` are passed through, as are unknown
/// flags, which clap then rejects.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (index, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if index == 0 || passthrough || expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }
        let arg = rewrite_single_dash(arg);
        expects_value = takes_separate_value(&arg);
        out.push(arg);
    }

    out
}

fn rewrite_single_dash(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if LONG_FLAGS.contains(&name) {
        OsString::from(format!("-{}", text))
    } else {
        arg
    }
}

fn takes_separate_value(arg: &OsString) -> bool {
    arg.to_str()
        .and_then(|text| text.strip_prefix("--"))
        .is_some_and(|name| VALUE_FLAGS.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|arg| arg.into_string().unwrap())
            .collect()
    }

    #[test]
    fn test_single_dash_long_flags_are_rewritten() {
        assert_eq!(
            normalize(&["csminer", "-threads", "4", "-tls", "-exclude=11-16"]),
            vec!["csminer", "--threads", "4", "--tls", "--exclude=11-16"]
        );
    }

    #[test]
    fn test_values_and_double_dash_untouched() {
        assert_eq!(
            normalize(&["csminer", "-user", "-dev", "-h", "--rigid=x"]),
            vec!["csminer", "--user", "-dev", "-h", "--rigid=x"]
        );
    }

    #[test]
    fn test_program_name_and_passthrough_untouched() {
        assert_eq!(
            normalize(&["-dev", "--", "-saver"]),
            vec!["-dev", "--", "-saver"]
        );
    }

    #[test]
    fn test_unknown_single_dash_flag_left_for_clap() {
        assert_eq!(normalize(&["csminer", "-bogus"]), vec!["csminer", "-bogus"]);
    }
}
