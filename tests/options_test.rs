// csminer - Free and Open Source Software Statement
//
// This project, csminer, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/options_test.rs
// Version: 0.3.3
// Developer: cryptonote.social <cryptonote.social@gmail.com>
//
// This file contains tests for command-line parsing: defaults, single-dash
// flags, boolean forms, usage errors and the help text.
//
// Tree Location:
// - tests/options_test.rs (option parsing tests)
// - Depends on: csminer, clap

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use csminer::Options;
    use csminer::help::{DONATE_USERNAME, FEEDBACK_CONTACT, STATS_WEBPAGE, render_usage};

    #[test]
    fn test_defaults() {
        let options = Options::try_parse_args(["csminer"]).unwrap();
        assert_eq!(options, Options::default());
        assert_eq!(options.threads, 3);
        assert_eq!(options.user, DONATE_USERNAME);
        assert_eq!(options.rigid, "csminer");
        assert!(!options.tls);
        assert!(options.exclude.is_empty());
        assert!(options.config.is_empty());
        assert!(options.wallet.is_empty());
        assert!(!options.saver);
        assert!(!options.dev);
    }

    #[test]
    fn test_single_dash_flags() {
        let options = Options::try_parse_args([
            "csminer",
            "-threads",
            "8",
            "-user=alice",
            "-rigid",
            "office-pc",
            "-exclude",
            "23-7",
            "-config=start_diff=1000;donate=1.0",
            "-wallet",
            "4AdUndXHHZ",
            "-saver",
            "-dev",
            "-tls",
        ])
        .unwrap();

        assert_eq!(options.threads, 8);
        assert_eq!(options.user, "alice");
        assert_eq!(options.rigid, "office-pc");
        assert_eq!(options.exclude, "23-7");
        assert_eq!(options.config, "start_diff=1000;donate=1.0");
        assert_eq!(options.wallet, "4AdUndXHHZ");
        assert!(options.saver);
        assert!(options.dev);
        assert!(options.tls);
    }

    #[test]
    fn test_double_dash_flags() {
        let options = Options::try_parse_args(["csminer", "--threads", "1", "--user", "bob"]).unwrap();
        assert_eq!(options.threads, 1);
        assert_eq!(options.user, "bob");
    }

    #[test]
    fn test_string_values_may_start_with_hyphen() {
        let options = Options::try_parse_args(["csminer", "-user", "-dev"]).unwrap();
        assert_eq!(options.user, "-dev");
        assert!(!options.dev);

        let options = Options::try_parse_args(["csminer", "-config", "-x=1"]).unwrap();
        assert_eq!(options.config, "-x=1");

        let options = Options::try_parse_args(["csminer", "-exclude", "-5-6", "-rigid", "-r"]).unwrap();
        assert_eq!(options.exclude, "-5-6");
        assert_eq!(options.rigid, "-r");
    }

    #[test]
    fn test_explicit_bool_values() {
        let options =
            Options::try_parse_args(["csminer", "-saver=false", "-tls=true", "-dev=false"]).unwrap();
        assert!(!options.saver);
        assert!(options.tls);
        assert!(!options.dev);
    }

    #[test]
    fn test_invalid_bool_value_is_rejected() {
        let err = Options::try_parse_args(["csminer", "-tls=maybe"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Options::try_parse_args(["csminer", "-bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_integer_threads_is_rejected() {
        assert!(Options::try_parse_args(["csminer", "-threads", "many"]).is_err());
        assert!(Options::try_parse_args(["csminer", "-threads=-2"]).is_err());
    }

    #[test]
    fn test_positional_argument_is_rejected() {
        assert!(Options::try_parse_args(["csminer", "mine"]).is_err());
    }

    #[test]
    fn test_help_request() {
        let err = Options::try_parse_args(["csminer", "-help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_usage_text() {
        let usage = render_usage();
        assert!(usage.starts_with("==== bgminer "));
        for option in [
            "--threads", "--user", "--rigid", "--tls", "--exclude", "--config", "--wallet",
            "--saver", "--dev",
        ] {
            assert!(usage.contains(option), "usage is missing {}", option);
        }
        assert!(usage.contains(STATS_WEBPAGE));
        assert!(usage.contains(FEEDBACK_CONTACT));
    }
}
