use normalizer::{NormalizeConfig, Normalizer};

struct Case {
    input: &'static str,
    expected: &'static str,
}

/// Provider-name corpus inherited from production playlist scans. Every
/// vector here is load-bearing: each one was added because some provider
/// actually spelled a channel that way.
#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            input: "|AR| AD SPORT 4 HEVC",
            expected: "ARADSPORT4",
        },
        Case {
            input: "|FR| GOLF CHANNELS HD",
            expected: "FRGOLFCHANNELS",
        },
        Case {
            input: "|RO| Ardeal TV",
            expected: "ARDEALTV",
        },
        Case {
            input: "|ROM|: Cromtel",
            expected: "CROMTEL",
        },
        Case {
            input: "|UK| CHELSEA TV (Live On Matches) HD",
            expected: "UKCHELSEATV",
        },
        Case {
            input: "RO    \" DIGI SPORT 1 HD RO",
            expected: "DIGISPORT1",
        },
        Case {
            input: "RO-Animal Planet HD",
            expected: "ANIMALPLANET",
        },
        Case {
            input: "RO: Animal World [768p]",
            expected: "ANIMALWORLD",
        },
        Case {
            input: "RO: Bit TV (ROM)",
            expected: "BITTV",
        },
        Case {
            input: "RO: HBO 3 RO",
            expected: "HBO3",
        },
        Case {
            input: "RO: HBO HD RO",
            expected: "HBO",
        },
        Case {
            input: "RO: Nașul TV (New!)",
            expected: "NASULTV",
        },
        Case {
            input: "RO: U TV S1-1",
            expected: "UTV",
        },
        Case {
            input: "RO\" Romania TV",
            expected: "ROMANIATV",
        },
        Case {
            input: "RUMANIA: DigiWorld FHD (Opt-1)",
            expected: "DIGIWORLD",
        },
        Case {
            input: "U TV",
            expected: "UTV",
        },
        Case {
            input: "US: NASA TV US",
            expected: "USNASATV",
        },
        Case {
            input: "VIP|RO|: Discovery Channel FHD",
            expected: "DISCOVERYCHANNEL",
        },
    ];

    let normalizer = Normalizer::new(NormalizeConfig::default()).expect("default config");
    for case in &cases {
        let token = normalizer.normalize(case.input);
        assert_eq!(
            token.as_str(),
            case.expected,
            "input {:?} normalized to {:?}, expected {:?}",
            case.input,
            token,
            case.expected
        );

        // The pipeline must be a projection: re-normalizing any output
        // returns it unchanged.
        assert_eq!(
            normalizer.normalize(token.as_str()),
            token,
            "idempotence violated for {:?}",
            case.input
        );
    }
}
