use std::{
    fs::File,
    io::{self, Read},
};

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use ubxtool::{
    encoder::{self, Feature},
    epoch::EpochGrouper,
    parser::Frame,
    ubx_packets::Decoded,
    Options, Parser, Verbosity,
};

const READ_CHUNK: usize = 4096;

fn main() -> anyhow::Result<()> {
    let matches = Command::new("ubx-dump")
        .author(clap::crate_authors!())
        .about("Decodes u-blox UBX captures and prints receiver commands")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Capture to decode, stdin when absent"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Raise verbosity, repeat for more"),
        )
        .arg(
            Arg::new("protver")
                .short('P')
                .long("protver")
                .value_parser(value_parser!(u8))
                .help("Receiver protocol version, e.g. 18 for u-blox 8"),
        )
        .arg(
            Arg::new("epochs")
                .long("epochs")
                .action(ArgAction::SetTrue)
                .help("Group UBX messages by GPS time of week"),
        )
        .arg(
            Arg::new("poll")
                .short('p')
                .long("poll")
                .value_name("MESSAGE")
                .help("Print the poll frame for MESSAGE, e.g. MON-VER"),
        )
        .arg(
            Arg::new("enable")
                .short('e')
                .long("enable")
                .value_name("FEATURE")
                .help("Print the frames enabling FEATURE, e.g. BINARY"),
        )
        .arg(
            Arg::new("disable")
                .short('d')
                .long("disable")
                .value_name("FEATURE")
                .help("Print the frames disabling FEATURE"),
        )
        .arg(
            Arg::new("set")
                .short('z')
                .long("set")
                .value_name("NAME,VALUE")
                .action(ArgAction::Append)
                .help("Print a CFG-VALSET frame for the RAM layer"),
        )
        .get_matches();

    let verbose = matches.get_count("verbose");
    let verbosity = Verbosity::from(verbose.saturating_add(1));
    env_logger::Builder::new()
        .filter_level(match verbosity {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Warn,
            Verbosity::Decode | Verbosity::Info => log::LevelFilter::Debug,
            Verbosity::Raw | Verbosity::Prog => log::LevelFilter::Trace,
        })
        .parse_default_env()
        .init();

    let mut options = Options::new().with_verbosity(verbosity);
    if let Some(protver) = matches.get_one::<u8>("protver") {
        options = options.with_protver(*protver);
    }

    let mut commands = Vec::new();
    if let Some(name) = matches.get_one::<String>("poll") {
        commands.push(encoder::poll_named(name)?);
    }
    for (arg, enable) in [("enable", true), ("disable", false)] {
        if let Some(name) = matches.get_one::<String>(arg) {
            let feature = Feature::from_name(name)
                .with_context(|| format!("unknown feature {}", name))?;
            commands.extend(if enable {
                encoder::enable(feature, &options)
            } else {
                encoder::disable(feature, &options)
            });
        }
    }
    if let Some(pairs) = matches.get_many::<String>("set") {
        let pairs: Vec<&String> = pairs.collect();
        commands.push(encoder::cfg_valset(encoder::LAYER_RAM, &pairs)?);
    }
    if !commands.is_empty() {
        for cmd in commands {
            let hex: Vec<String> = cmd.iter().map(|b| format!("{:02x}", b)).collect();
            println!("{}", hex.join(" "));
        }
        return Ok(());
    }

    let input: Box<dyn Read> = match matches.get_one::<String>("file") {
        Some(path) => {
            Box::new(File::open(path).with_context(|| format!("failed to open {}", path))?)
        },
        None => Box::new(io::stdin()),
    };
    dump(input, options, matches.get_flag("epochs"))
}

fn dump(mut input: impl Read, options: Options, epochs: bool) -> anyhow::Result<()> {
    let mut parser = Parser::new(options);
    let mut grouper = EpochGrouper::new();
    let mut buf = [0u8; READ_CHUNK];

    loop {
        let n = input.read(&mut buf).context("read failed")?;
        if n == 0 {
            break;
        }
        let frames: Vec<Frame> = parser.consume(&buf[..n]).collect();
        for frame in frames {
            if let Frame::Ubx {
                decoded: Decoded::Message(msg),
                ..
            } = &frame
            {
                if let ubxtool::ubx_packets::UbxMessage::MonVer(ver) = &msg.message {
                    if let Some(protver) = ver.protver() {
                        parser.options_mut().observe_protver(protver);
                    }
                }
                if epochs {
                    if let Some(group) = grouper.push(msg.clone()) {
                        print_epoch(&group);
                    }
                    continue;
                }
            }
            println!("{}", frame);
        }
    }

    if let Some(group) = grouper.finish() {
        print_epoch(&group);
    }
    if !parser.is_buffer_empty() {
        log::warn!("{} trailing bytes did not form a frame", parser.buffer_len());
    }
    Ok(())
}

fn print_epoch(group: &[ubxtool::ubx_packets::DecodedMessage]) {
    let itow = group.iter().find_map(|msg| msg.itow());
    let names: Vec<&str> = group.iter().map(|msg| msg.type_name).collect();
    match itow {
        Some(itow) => println!("iTOW {} ms: {}", itow, names.join(" ")),
        None => println!("no iTOW: {}", names.join(" ")),
    }
}
