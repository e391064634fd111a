use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gsm_sms_lib::adapters::{LogObserver, SerialPortFactory};
use gsm_sms_lib::at::transpose;
use gsm_sms_lib::domain::{Acknowledgment, DeliveryStatus, GsmError, GsmResult, ModemProfile};
use gsm_sms_lib::ports::SerialFactory;
use gsm_sms_lib::ModemSession;

/// Send SMS messages through a GSM modem
#[derive(Parser)]
#[command(name = "gsm-sms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Serial port the modem is attached to
    #[arg(short, long, global = true, env = "GSM_SMS_PORT")]
    port: Option<String>,

    /// Serial baud rate
    #[arg(short, long, global = true, env = "GSM_SMS_BAUD", default_value_t = 115200)]
    baud: u32,

    /// Device label used in log lines
    #[arg(long, global = true, default_value = "modem-1")]
    device_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List serial ports on this machine
    Ports,

    /// Send one text message
    Send {
        /// Recipient phone number, e.g. +628123456789
        number: String,

        /// Message text
        message: String,
    },

    /// Issue a raw AT command and print the response
    At {
        /// Command text; `\r\n` is appended when missing
        command: String,

        /// Absorb one byte instead of waiting for OK/ERROR
        #[arg(long)]
        no_wait: bool,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> GsmResult<ExitCode> {
    match &cli.command {
        Commands::Ports => {
            for port in SerialPortFactory.list_ports()? {
                println!("{}\t{}", port.name, port.port_type);
            }
        }
        Commands::Send { number, message } => {
            let mut session = connect(&cli)?;
            let ack = session.write_message(number, message)?;
            let status = Acknowledgment::classify(&ack)
                .map(|a| a.delivery_status())
                .unwrap_or(DeliveryStatus::SendingError);
            println!("{status}");
            if status != DeliveryStatus::SendingOk {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::At { command, no_wait } => {
            let mut session = connect(&cli)?;
            let wire = if command.ends_with("\r\n") {
                command.clone()
            } else {
                format!("{command}\r\n")
            };
            let response = session.write_command(&wire, !no_wait)?;
            println!("{}", transpose(&response));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn profile_from(cli: &Cli) -> GsmResult<ModemProfile> {
    let port = cli
        .port
        .as_deref()
        .ok_or_else(|| GsmError::Config("No modem given; use --port PORT".to_string()))?;
    Ok(ModemProfile {
        device_id: cli.device_id.clone(),
        ..ModemProfile::for_port(port, cli.baud)
    })
}

fn connect(cli: &Cli) -> GsmResult<ModemSession> {
    let profile = profile_from(cli)?;
    let observer = LogObserver::tagged(&profile.device_id);
    let mut session = ModemSession::new(profile).with_observer(Box::new(observer));
    session.connect(&SerialPortFactory)?;

    let profile = session.profile();
    log::info!(
        "Connected to {} on {} at {} baud",
        profile.device_id,
        profile.serial_port.as_deref().unwrap_or_default(),
        profile.baud_rate
    );
    Ok(session)
}
