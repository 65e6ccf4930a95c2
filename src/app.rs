use anyhow::Result;

use crate::{
    cli::{Cli, Command},
    domain::message::Message,
    infra,
    usecases::{
        self, bootstrap,
        compose::{compose_message, filter_valid_addresses, ComposeCommand},
        contracts::{DispatchError, Dispatcher},
        demo::run_demo,
        dispatch::BasicDispatcher,
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = crate::domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        log_file = %context.config.delivery.log_file.display(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Demo => {
            let plain = BasicDispatcher::new();
            let logging = bootstrap::compose_dispatcher(&context);

            for line in run_demo(&plain, &logging)? {
                println!("{line}");
            }
            println!(
                "Delivery log appended to {}",
                context.config.delivery.log_file.display()
            );
        }
        Command::Check { addresses } => {
            for line in check_lines(&addresses) {
                println!("{line}");
            }
        }
        Command::Send {
            from,
            to,
            subject,
            body,
        } => {
            let command = ComposeCommand {
                sender: from.unwrap_or_else(|| context.config.delivery.default_sender.clone()),
                recipients: to,
                subject,
                body,
            };
            let composed = compose_message(command, &context.compose_policy())?;

            for rejected in &composed.rejected {
                eprintln!("skipped: {rejected}");
            }
            for excluded in &composed.excluded {
                eprintln!("skipped: {excluded} is the sender");
            }

            let dispatcher = bootstrap::compose_dispatcher(&context);
            match dispatcher.send(&composed.message) {
                Ok(copies) => print_copies(&copies),
                Err(DispatchError::LogFailed { copies, source }) => {
                    print_copies(&copies);
                    return Err(source.into());
                }
            }
        }
    }

    Ok(())
}

fn print_copies(copies: &[Message]) {
    for copy in copies {
        println!("{}", copy.sent_text());
        println!("[{}]", copy.status);
        println!();
    }
}

fn check_lines(addresses: &[String]) -> Vec<String> {
    let screening = filter_valid_addresses(addresses);

    screening
        .accepted
        .iter()
        .map(|address| format!("ok       {address} ({})", address.masked()))
        .chain(
            screening
                .rejected
                .iter()
                .map(|error| format!("rejected {:?}", error.input)),
        )
        .collect()
}
