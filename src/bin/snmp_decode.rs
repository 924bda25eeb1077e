//! snmp-decode: Decode a captured SNMP response.
//!
//! Reads one BER-encoded v1/v2c response message from a file or stdin and
//! prints its bindings.

use bytes::Bytes;
use clap::Parser;
use snmp_decode::cli::args::{InputArgs, OutputArgs};
use snmp_decode::cli::output::{
    DecodeReport, OutputContext, write_error, write_verbose_header, write_verbose_varbinds,
};
use snmp_decode::{DecodedResponse, Envelope, Pdu};
use std::process::ExitCode;

/// Decode a captured SNMP response message.
#[derive(Debug, Parser)]
#[command(name = "snmp-decode", version, about)]
struct Args {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> ExitCode {
    let args = Args::parse();

    args.output.init_tracing();

    let packet = match args.input.read_packet() {
        Ok(data) => Bytes::from(data),
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(target: "snmp_decode::cli", bytes = packet.len(), "read packet");

    let output_ctx = OutputContext {
        format: args.output.format,
        show_hints: !args.output.no_hints,
        force_hex: args.output.force_hex,
        prefix: args.input.prefix.clone(),
    };

    match run(&args, &output_ctx, packet) {
        Ok(report) => {
            if let Err(e) = output_ctx.write_report(&report) {
                eprintln!("Error writing output: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            write_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, output_ctx: &OutputContext, packet: Bytes) -> snmp_decode::Result<DecodeReport> {
    if !args.input.lenient && !args.output.verbose {
        let response = DecodedResponse::decode(packet)?;
        return Ok(output_ctx.report(&response));
    }

    let envelope = Envelope::parse(packet)?;
    let pdu = Pdu::parse(&envelope.body, envelope.pdu_type)?;

    if args.output.verbose {
        write_verbose_header(&envelope, &pdu);
        write_verbose_varbinds(&pdu, !args.output.no_hints);
    }

    if args.input.lenient {
        output_ctx.lenient_report(&envelope, &pdu)
    } else {
        let response = DecodedResponse {
            version: envelope.version,
            community: envelope.community.clone(),
            pdu_type: pdu.pdu_type,
            request_id: pdu.request_id,
            error_status: pdu.error_status,
            error_index: pdu.error_index,
            varbinds: pdu.decode_bindings()?,
        };
        Ok(output_ctx.report(&response))
    }
}
