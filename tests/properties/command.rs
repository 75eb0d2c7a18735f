//! Property tests for checker argv construction.

use proptest::prelude::*;

use tcwatch::application::build_command;
use tcwatch::{ExtraArgs, PathSet, RunOptions};

fn token() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 _='\"-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: list extra args are passed through verbatim, right after `--dir <value>`.
    #[test]
    fn property_list_extra_args_verbatim(
        extra in prop::collection::vec(token(), 0..=6),
        use_config_file in any::<bool>(),
        colorize in prop::option::of(prop::sample::select(vec!["always", "never", "auto"])),
    ) {
        let options = RunOptions::default()
            .with_use_config_file(use_config_file)
            .with_colorize(colorize.map(str::to_string))
            .with_extra_args(ExtraArgs::List(extra.clone()));

        let command = build_command(&options, &PathSet::empty(), true).unwrap();
        let args = command.args();

        let dir = args.iter().position(|a| a == "--dir").unwrap();
        prop_assert_eq!(&args[dir + 1], ".");
        prop_assert_eq!(&args[dir + 2..], extra.as_slice());
        let prefix = &args[..dir];
        prop_assert_eq!(prefix.contains(&"--no-config".to_string()), !use_config_file);
        let color = prefix
            .iter()
            .position(|a| a == "--color")
            .map(|i| prefix[i + 1].as_str());
        prop_assert_eq!(color, colorize);
    }

    /// PROPERTY: a shell-quoted line splits back into the original tokens.
    #[test]
    fn property_line_extra_args_split_like_a_shell(
        extra in prop::collection::vec(token(), 0..=6),
    ) {
        let line = shell_words::join(&extra);
        let options = RunOptions::default().with_extra_args(ExtraArgs::Line(line));

        let command = build_command(&options, &PathSet::empty(), false).unwrap();
        let args = command.args();

        prop_assert_eq!(command.value_of("--dir"), Some("sorbet"));
        let dir = args.iter().position(|a| a == "--dir").unwrap();
        prop_assert_eq!(&args[dir + 2..], extra.as_slice());
    }
}
