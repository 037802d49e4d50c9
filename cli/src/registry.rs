use crate::actor::{Actor, ActorKind};
use crate::commands::{
    GuestClass, PruneBoxActor, ProvisionActor, RunTestsActor, VagrantCommandActor,
    VagrantExternalCommandActor,
};

/// A subcommand name bound to the actor that implements it.
pub struct Command {
    name: &'static str,
    description: &'static str,
    factory: fn() -> ActorKind,
}

impl Command {
    pub fn new(name: &'static str, description: &'static str, factory: fn() -> ActorKind) -> Self {
        Self {
            name,
            description,
            factory,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn actor(&self) -> ActorKind {
        (self.factory)()
    }
}

/// Registered subcommands, in registration order. Names are unique.
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new(commands: Vec<Command>) -> Self {
        let mut unique: Vec<Command> = Vec::with_capacity(commands.len());
        for cmd in commands {
            if unique.iter().any(|c| c.name == cmd.name) {
                tracing::warn!(command = cmd.name, "ignoring duplicate command registration");
                continue;
            }
            unique.push(cmd);
        }
        Self { commands: unique }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name).collect()
    }

    /// Adds one clap subcommand per registered command.
    pub fn augment(&self, mut root: clap::Command) -> clap::Command {
        for cmd in &self.commands {
            let sub = clap::Command::new(cmd.name).about(cmd.description);
            root = root.subcommand(cmd.actor().setup_parser(sub));
        }
        root
    }
}

fn vagrant(command: &'static str) -> ActorKind {
    ActorKind::Vagrant(VagrantCommandActor::new(command))
}

pub fn default_commands() -> CommandList {
    CommandList::new(vec![
        Command::new("status", "Show current state of guest machines", || vagrant("status")),
        Command::new("up", "Bring up guest machines", || vagrant("up")),
        Command::new("halt", "Halt guest machines", || vagrant("halt")),
        Command::new("destroy", "Destroy guest machines", || vagrant("destroy")),
        Command::new("reload", "Restarts guest machines", || vagrant("reload")),
        Command::new("resume", "Resume suspended guest machines", || vagrant("resume")),
        Command::new("suspend", "Suspends guest machines", || vagrant("suspend")),
        Command::new("ssh", "Open SSH to guest machine", || {
            ActorKind::External(VagrantExternalCommandActor::new(
                "ssh",
                GuestClass::Linux,
                "client -- echo Hello",
            ))
        }),
        Command::new("rdp", "Open remote desktop to guest machine", || {
            ActorKind::External(VagrantExternalCommandActor::new(
                "rdp",
                GuestClass::Windows,
                "ad -- -g 90%",
            ))
        }),
        Command::new("box-update", "Update boxes of guest machines", || {
            vagrant("box update")
        }),
        Command::new("prune-boxes", "Remove outdated boxes", || {
            ActorKind::PruneBoxes(PruneBoxActor::new())
        }),
        Command::new("provision", "Provision host or guest machines", || {
            ActorKind::Provision(ProvisionActor::new())
        }),
        Command::new("run", "Run SSSD tests", || {
            ActorKind::RunTests(RunTestsActor::new())
        }),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_every_command_once() {
        let commands = default_commands();
        assert_eq!(
            commands.names(),
            vec![
                "status",
                "up",
                "halt",
                "destroy",
                "reload",
                "resume",
                "suspend",
                "ssh",
                "rdp",
                "box-update",
                "prune-boxes",
                "provision",
                "run",
            ]
        );
        assert!(commands.get("nope").is_none());
        assert!(commands.get("ssh").unwrap().actor().accepts_passthrough());
        assert!(!commands.get("up").unwrap().actor().accepts_passthrough());
    }

    #[test]
    fn duplicate_names_keep_first_registration() {
        let commands = CommandList::new(vec![
            Command::new("up", "first", || vagrant("up")),
            Command::new("up", "second", || vagrant("halt")),
        ]);
        assert_eq!(commands.names(), vec!["up"]);
        assert_eq!(commands.get("up").unwrap().description(), "first");
    }
}
