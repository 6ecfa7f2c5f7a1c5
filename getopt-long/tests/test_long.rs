use getopt_long::{Diagnostic, Flag, Getopt, HasArg, LongOpt, Opt};

fn scanner(args: &[&str], optstring: &str, long_options: Vec<LongOpt>) -> Getopt {
    Getopt::builder(args.iter().copied())
        .prog("test")
        .optstring(optstring)
        .long_options(long_options)
        .opterr(false)
        .build()
        .unwrap()
}

fn foo_foobar() -> Vec<LongOpt> {
    vec![
        LongOpt::new("foo", HasArg::No).val('f' as i32),
        LongOpt::new("foobar", HasArg::No).val('b' as i32),
    ]
}

#[test]
fn test_exact_match_beats_prefix() {
    let mut getopt = scanner(&["--foo"], "", foo_foobar());
    assert_eq!(getopt.next_opt(), Some(Opt::Long('f' as i32)));
    assert_eq!(getopt.longind(), Some(0));
    assert_eq!(getopt.optind(), 1);

    // the exact match also wins when it is declared after a longer name
    let mut getopt = scanner(
        &["--foo"],
        "",
        vec![
            LongOpt::new("foobar", HasArg::No).val(1),
            LongOpt::new("foo", HasArg::No).val(2),
        ],
    );
    assert_eq!(getopt.next_opt(), Some(Opt::Long(2)));
    assert_eq!(getopt.longind(), Some(1));
}

#[test]
fn test_ambiguous_prefix() {
    let mut getopt = scanner(&["--fo", "--foob"], "", foo_foobar());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 0);
    assert_eq!(getopt.optind(), 1);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Ambiguous {
            option: "--fo".into()
        })
    );

    assert_eq!(getopt.next_opt(), Some(Opt::Long('b' as i32)));
    assert_eq!(getopt.longind(), Some(1));
    assert_eq!(getopt.diagnostic(), None);
}

#[test]
fn test_unique_abbreviation() {
    let opts = || {
        vec![
            LongOpt::new("verbose", HasArg::No).val(1),
            LongOpt::new("version", HasArg::No).val(2),
        ]
    };
    let mut getopt = scanner(&["--verb", "--vers", "--ver"], "", opts());
    assert_eq!(getopt.next_opt(), Some(Opt::Long(1)));
    assert_eq!(getopt.next_opt(), Some(Opt::Long(2)));
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.next_opt(), None);
}

#[test]
fn test_unrecognized() {
    let mut getopt = scanner(&["--nope", "-a"], "a", foo_foobar());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 0);
    assert_eq!(getopt.optind(), 1);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Unrecognized {
            option: "--nope".into()
        })
    );
    assert_eq!(getopt.next_opt(), Some(Opt::Short('a')));
}

#[test]
fn test_arguments() {
    let opts = vec![
        LongOpt::new("out", HasArg::Required).val('o' as i32),
        LongOpt::new("color", HasArg::Optional).val('c' as i32),
    ];
    let mut getopt = scanner(
        &["--out=a", "--out=", "--out", "b", "--color", "--color=always", "--col", "x"],
        "",
        opts,
    );
    let mut seen = Vec::new();
    while let Some(opt) = getopt.next_opt() {
        seen.push((opt.code(), getopt.optarg().map(str::to_string)));
    }
    let o = 'o' as i32;
    let c = 'c' as i32;
    assert_eq!(
        seen,
        vec![
            (o, Some("a".to_string())),
            (o, Some("".to_string())),
            (o, Some("b".to_string())),
            (c, None),
            (c, Some("always".to_string())),
            (c, None),
        ]
    );
    assert_eq!(getopt.operands(), ["x"]);
}

#[test]
fn test_argument_not_allowed() {
    let mut getopt = scanner(&["--foo=1"], "", foo_foobar());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 'f' as i32);
    assert_eq!(getopt.optind(), 1);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::NotAllowed {
            option: "--foo".into()
        })
    );
}

#[test]
fn test_required_argument_missing() {
    let opts = || vec![LongOpt::new("out", HasArg::Required).val(9)];

    let mut getopt = scanner(&["--out"], "a", opts());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 9);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::RequiresArgument {
            option: "--out".into()
        })
    );

    let mut getopt = scanner(&["--out"], ":a", opts());
    assert_eq!(getopt.next_opt(), Some(Opt::MissingArgument));
    assert_eq!(getopt.optopt(), 9);
    assert_eq!(getopt.next_opt(), None);
}

#[test]
fn test_flag_target() {
    let verbose = Flag::new();
    let opts = vec![
        LongOpt::new("verbose", HasArg::No).val(7).flag(verbose.clone()),
        LongOpt::new("quiet", HasArg::No).val(3),
    ];
    let mut getopt = scanner(&["--quiet", "--verbose"], "", opts);

    assert_eq!(getopt.next_opt(), Some(Opt::Long(3)));
    assert_eq!(verbose.get(), None);

    let opt = getopt.next_opt().unwrap();
    assert_eq!(opt, Opt::Flag);
    assert_eq!(opt.code(), 0);
    assert_eq!(verbose.get(), Some(7));
    assert_eq!(getopt.long_options()[0].flag_cell().unwrap().get(), Some(7));
}

#[test]
fn test_flag_target_is_overwritten() {
    let level = Flag::new();
    let opts = vec![
        LongOpt::new("fast", HasArg::No).val(1).flag(level.clone()),
        LongOpt::new("slow", HasArg::No).val(2).flag(level.clone()),
    ];
    let mut getopt = scanner(&["--fast", "--slow"], "", opts);
    assert_eq!(getopt.next_opt(), Some(Opt::Flag));
    assert_eq!(level.get(), Some(1));
    assert_eq!(getopt.next_opt(), Some(Opt::Flag));
    assert_eq!(level.get(), Some(2));
}

#[test]
fn test_long_option_permuted() {
    let opts = vec![LongOpt::new("out", HasArg::Required).val('o' as i32)];
    let mut getopt = scanner(&["in", "--out", "file", "rest"], "", opts);
    assert_eq!(getopt.next_opt(), Some(Opt::Long('o' as i32)));
    assert_eq!(getopt.optarg(), Some("file"));
    assert_eq!(getopt.next_opt(), None);
    assert_eq!(getopt.args(), ["--out", "file", "in", "rest"]);
    assert_eq!(getopt.optind(), 2);
}

#[test]
fn test_long_only() {
    let opts = vec![LongOpt::new("verbose", HasArg::No).val('V' as i32)];
    let mut getopt = Getopt::builder(["-verbose", "-v", "-verb", "-vx", "--verbose", "-zzz"])
        .optstring("vx")
        .long_options(opts)
        .long_only(true)
        .opterr(false)
        .build()
        .unwrap();

    let opts: Vec<Opt> = getopt.by_ref().collect();
    assert_eq!(
        opts,
        vec![
            Opt::Long('V' as i32),
            Opt::Short('v'),
            Opt::Long('V' as i32),
            Opt::Short('v'),
            Opt::Short('x'),
            Opt::Long('V' as i32),
            Opt::Unknown,
        ]
    );
}

#[test]
fn test_long_only_unrecognized() {
    let mut getopt = Getopt::builder(["-zzz"])
        .optstring("v")
        .long_options(vec![LongOpt::new("verbose", HasArg::No)])
        .long_only(true)
        .opterr(false)
        .build()
        .unwrap();
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 0);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Unrecognized {
            option: "-zzz".into()
        })
    );
}

#[test]
fn test_no_long_options_configured() {
    let mut getopt = Getopt::builder(["--foo"])
        .optstring("f")
        .opterr(false)
        .build()
        .unwrap();
    assert_eq!(getopt.next_opt(), Some(Opt::Short('f')));
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 'o' as i32);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Invalid {
            ch: 'o',
            posix: false
        })
    );
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.next_opt(), None);
    assert_eq!(getopt.optind(), 1);
}

#[test]
fn test_identical_prefix_matches_are_not_ambiguous() {
    let opts = vec![
        LongOpt::new("color", HasArg::Optional).val('c' as i32),
        LongOpt::new("colour", HasArg::Optional).val('c' as i32),
    ];
    let mut getopt = scanner(&["--col=never"], "", opts);
    assert_eq!(getopt.next_opt(), Some(Opt::Long('c' as i32)));
    assert_eq!(getopt.optarg(), Some("never"));
    assert_eq!(getopt.longind(), Some(0));
    assert_eq!(getopt.diagnostic(), None);
}

#[test]
fn test_prefix_matches_differing_in_flag_are_ambiguous() {
    let opts = vec![
        LongOpt::new("color", HasArg::No).val(1).flag(Flag::new()),
        LongOpt::new("colour", HasArg::No).val(1).flag(Flag::new()),
    ];
    let mut getopt = scanner(&["--col"], "", opts);
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Ambiguous {
            option: "--col".into()
        })
    );

    let shared = Flag::new();
    let opts = vec![
        LongOpt::new("color", HasArg::No).val(1).flag(shared.clone()),
        LongOpt::new("colour", HasArg::No).val(1).flag(shared.clone()),
    ];
    let mut getopt = scanner(&["--col"], "", opts);
    assert_eq!(getopt.next_opt(), Some(Opt::Flag));
    assert_eq!(shared.get(), Some(1));
}

fn w_options() -> Vec<LongOpt> {
    vec![
        LongOpt::new("foo", HasArg::No).val('f' as i32),
        LongOpt::new("bar", HasArg::Required).val('b' as i32),
    ]
}

#[test]
fn test_w_separate_name() {
    let mut getopt = scanner(&["-W", "foo", "x"], "W;a", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::Long('f' as i32)));
    assert_eq!(getopt.optind(), 2);
    assert_eq!(getopt.longind(), Some(0));
    assert_eq!(getopt.next_opt(), None);
    assert_eq!(getopt.operands(), ["x"]);
}

#[test]
fn test_w_attached_name() {
    let mut getopt = scanner(&["-Wfoo", "-Wbar=1", "-W", "ba", "arg"], "W;", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::Long('f' as i32)));
    assert_eq!(getopt.optind(), 1);
    assert_eq!(getopt.next_opt(), Some(Opt::Long('b' as i32)));
    assert_eq!(getopt.optarg(), Some("1"));
    assert_eq!(getopt.next_opt(), Some(Opt::Long('b' as i32)));
    assert_eq!(getopt.optarg(), Some("arg"));
    assert_eq!(getopt.optind(), 5);
}

#[test]
fn test_w_unknown_name() {
    let mut getopt = scanner(&["-W", "baz", "-a"], "aW;", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::W));
    assert_eq!(getopt.optarg(), Some("baz"));
    assert_eq!(getopt.optind(), 2);
    assert_eq!(getopt.next_opt(), Some(Opt::Short('a')));
}

#[test]
fn test_w_missing_name() {
    let mut getopt = scanner(&["-W"], "W;", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optopt(), 'W' as i32);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::ShortRequiresArgument { ch: 'W' })
    );

    let mut getopt = scanner(&["-W"], ":W;", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::MissingArgument));
}

#[test]
fn test_w_ambiguous() {
    let mut getopt = scanner(&["-W", "fo", "x"], "W;", foo_foobar());
    assert_eq!(getopt.next_opt(), Some(Opt::Unknown));
    assert_eq!(getopt.optind(), 2);
    assert_eq!(
        getopt.diagnostic(),
        Some(&Diagnostic::Ambiguous {
            option: "-W fo".into()
        })
    );
}

#[test]
fn test_w_without_semicolon_is_short() {
    let mut getopt = scanner(&["-W", "foo"], "W", w_options());
    assert_eq!(getopt.next_opt(), Some(Opt::Short('W')));
    assert_eq!(getopt.next_opt(), None);
    assert_eq!(getopt.operands(), ["foo"]);
}
