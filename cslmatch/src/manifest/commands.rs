//! Manifest command table and handlers.
//!
//! Every manifest line starts with a command keyword. The full pass looks the
//! keyword up in [`FULL_PASS_COMMANDS`] and runs its handler against the
//! [`PackageBuilder`]. `OBJECT`, `AIRCRAFT` and `OBJ8_AIRCRAFT` open a new
//! model; the other commands modify the most recently opened one.

use thiserror::Error;

use super::tokenizer::tokenize;
use crate::host::HostEnvironment;
use crate::matching::tier::{self, KeyParts, TIERS, TIER_COUNT};
use crate::package::{
    file_stem, lit_texture_path, normalize_separators, strip_extension, Attachment, DrawLayer,
    MatchIndex, Model, PackageRoots, PathError, Representation,
};
use crate::tables::GroupingTable;

/// How far a command failure reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScope {
    /// Only the model under construction is discarded.
    Model,
    /// The remaining lines of the package are not processed.
    Package,
    /// The whole package is discarded, including models already parsed.
    Dependency,
}

/// Errors raised by manifest command handlers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    #[error("{command} command takes {expected}")]
    WrongArgumentCount {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{command}: invalid value '{value}' - {reason}")]
    InvalidArgument {
        command: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0} has no model to apply to")]
    NoOpenModel(&'static str),

    #[error("OBJ8 must follow an OBJ8_AIRCRAFT line")]
    NotObj8Model,

    #[error("{0}")]
    Path(#[from] PathError),

    #[error("required package {0} not found, aborting processing of this package")]
    MissingDependency(String),
}

impl CommandError {
    pub fn scope(&self) -> ErrorScope {
        match self {
            CommandError::Path(_) => ErrorScope::Package,
            CommandError::MissingDependency(_) => ErrorScope::Dependency,
            _ => ErrorScope::Model,
        }
    }
}

type CommandResult = Result<(), CommandError>;
type Handler = fn(&mut PackageBuilder<'_>, &[&str]) -> CommandResult;

/// One entry of a command table.
pub struct Command {
    pub name: &'static str,
    /// Token limit passed to the tokenizer; 0 means unlimited.
    pub max_tokens: usize,
    handler: Handler,
}

impl Command {
    const fn new(name: &'static str, max_tokens: usize, handler: Handler) -> Self {
        Self {
            name,
            max_tokens,
            handler,
        }
    }

    /// Tokenize `line` for this command and run its handler.
    pub fn run(&self, builder: &mut PackageBuilder<'_>, line: &str) -> CommandResult {
        let tokens = tokenize(line, super::MANIFEST_SEPARATORS, self.max_tokens);
        (self.handler)(builder, &tokens)
    }
}

/// Commands understood by the full pass.
pub static FULL_PASS_COMMANDS: [Command; 12] = [
    Command::new("EXPORT_NAME", 0, export_name),
    Command::new("DEPENDENCY", 0, dependency),
    Command::new("OBJECT", 2, object),
    Command::new("TEXTURE", 2, texture),
    Command::new("AIRCRAFT", 4, aircraft),
    Command::new("OBJ8_AIRCRAFT", 2, obj8_aircraft),
    Command::new("OBJ8", 0, obj8),
    Command::new("VERT_OFFSET", 0, vert_offset),
    Command::new("HASGEAR", 0, has_gear),
    Command::new("ICAO", 0, icao),
    Command::new("AIRLINE", 0, airline),
    Command::new("LIVERY", 0, livery),
];

/// Find a full pass command by keyword.
pub fn find_command(name: &str) -> Option<&'static Command> {
    FULL_PASS_COMMANDS.iter().find(|c| c.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftStatus {
    Active,
    /// Failed a command; dropped at the end of the pass.
    Errored,
    /// `AIRCRAFT` line for another simulator version; dropped silently.
    Inactive,
}

#[derive(Debug)]
struct ModelDraft {
    model: Model,
    status: DraftStatus,
}

#[derive(Debug)]
struct Registration {
    tier: usize,
    key: String,
    draft: usize,
}

/// Models and indices produced by a full pass.
#[derive(Debug, Default)]
pub struct PackageContents {
    pub models: Vec<Model>,
    pub indices: [MatchIndex; TIER_COUNT],
    /// Models discarded because of errors.
    pub dropped: usize,
}

/// Accumulates the models of one package during the full pass.
pub struct PackageBuilder<'a> {
    roots: &'a PackageRoots,
    /// Install folder name of the package being parsed.
    folder_name: &'a str,
    groupings: &'a GroupingTable,
    host: &'a dyn HostEnvironment,
    drafts: Vec<ModelDraft>,
    registrations: Vec<Registration>,
}

impl<'a> PackageBuilder<'a> {
    pub fn new(
        roots: &'a PackageRoots,
        folder_name: &'a str,
        groupings: &'a GroupingTable,
        host: &'a dyn HostEnvironment,
    ) -> Self {
        Self {
            roots,
            folder_name,
            groupings,
            host,
            drafts: Vec::new(),
            registrations: Vec::new(),
        }
    }

    /// Number of models opened so far, including discarded ones.
    pub fn opened(&self) -> usize {
        self.drafts.len()
    }

    /// Flag the most recently opened model as invalid.
    pub fn flag_current(&mut self) {
        if let Some(draft) = self.drafts.last_mut() {
            draft.status = DraftStatus::Errored;
        }
    }

    /// Flag every model of the package as invalid.
    pub fn discard_all(&mut self) {
        for draft in &mut self.drafts {
            draft.status = DraftStatus::Errored;
        }
    }

    /// Drop invalid models and build the match indices.
    ///
    /// Registrations are replayed in the order they were made, so the first
    /// surviving model to register a key owns it.
    pub fn finish(self) -> PackageContents {
        let mut positions = Vec::with_capacity(self.drafts.len());
        let mut contents = PackageContents::default();

        for draft in self.drafts {
            match draft.status {
                DraftStatus::Active => {
                    positions.push(Some(contents.models.len()));
                    contents.models.push(draft.model);
                }
                DraftStatus::Errored => {
                    positions.push(None);
                    contents.dropped += 1;
                }
                DraftStatus::Inactive => positions.push(None),
            }
        }

        for registration in self.registrations {
            if let Some(position) = positions[registration.draft] {
                contents.indices[registration.tier].insert_first(registration.key, position);
            }
        }

        contents
    }

    fn open(&mut self, representation: Representation, status: DraftStatus) -> &mut Model {
        self.drafts.push(ModelDraft {
            model: Model::new(representation),
            status,
        });
        let last = self.drafts.len() - 1;
        &mut self.drafts[last].model
    }

    fn current(&mut self, command: &'static str) -> Result<&mut Model, CommandError> {
        self.drafts
            .last_mut()
            .map(|d| &mut d.model)
            .ok_or(CommandError::NoOpenModel(command))
    }

    fn activate_current(&mut self) {
        if let Some(draft) = self.drafts.last_mut() {
            draft.status = DraftStatus::Active;
        }
    }

    /// Resolve a manifest path against the registered packages.
    ///
    /// Returns the normalized relative path and the absolute path.
    fn resolve(&self, raw: &str) -> Result<(String, String), PathError> {
        let relative = normalize_separators(raw);
        let absolute = self.roots.substitute(&relative)?.path;
        Ok((relative, absolute))
    }

    /// Record the identification of the current model and its index keys.
    fn register(
        &mut self,
        command: &'static str,
        icao: &str,
        airline: Option<&str>,
        livery: Option<&str>,
        tiers: &[usize],
    ) -> CommandResult {
        let draft = self
            .drafts
            .len()
            .checked_sub(1)
            .ok_or(CommandError::NoOpenModel(command))?;

        let model = &mut self.drafts[draft].model;
        model.icao = icao.to_string();
        if let Some(airline) = airline {
            model.airline = Some(airline.to_string());
        }
        if let Some(livery) = livery {
            model.livery = Some(livery.to_string());
        }

        let parts = KeyParts {
            icao,
            group: self.groupings.group_of(icao),
            airline: airline.unwrap_or(""),
            livery: livery.unwrap_or(""),
        };
        for &tier in tiers {
            // Group tiers are skipped when the type has no group.
            if let Ok(key) = TIERS[tier].key(&parts) {
                self.registrations.push(Registration { tier, key, draft });
            }
        }
        Ok(())
    }
}

/// Split a relative object path into directory names and object name.
///
/// The first component (the package name) is replaced by `folder_name`, the
/// install folder of the package declaring the model, and the file name is
/// removed from the directory list.
fn object_location(relative: &str, folder_name: &str) -> (Vec<String>, String) {
    let mut dir_names: Vec<String> = tokenize(relative, "/", 0)
        .into_iter()
        .map(str::to_string)
        .collect();
    if let Some(first) = dir_names.first_mut() {
        *first = folder_name.to_string();
    }
    let file_name = dir_names.pop().unwrap_or_default();
    (dir_names, strip_extension(&file_name).to_string())
}

fn parse_yes_no(command: &'static str, value: &str) -> Result<bool, CommandError> {
    match value {
        "YES" => Ok(true),
        "NO" => Ok(false),
        other => Err(CommandError::InvalidArgument {
            command,
            value: other.to_string(),
            reason: "must be YES or NO".to_string(),
        }),
    }
}

fn expect_args(
    tokens: &[&str],
    count: usize,
    command: &'static str,
    expected: &'static str,
) -> CommandResult {
    if tokens.len() == count {
        Ok(())
    } else {
        Err(CommandError::WrongArgumentCount { command, expected })
    }
}

fn export_name(_: &mut PackageBuilder<'_>, _: &[&str]) -> CommandResult {
    Ok(())
}

fn dependency(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    expect_args(tokens, 2, "DEPENDENCY", "1 argument")?;
    if !builder.roots.contains_name(tokens[1]) {
        return Err(CommandError::MissingDependency(tokens[1].to_string()));
    }
    Ok(())
}

fn object(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.open(
        Representation::Object {
            path: String::new(),
            texture: None,
            lit_texture: None,
        },
        DraftStatus::Active,
    );
    expect_args(tokens, 2, "OBJECT", "1 argument")?;

    let (relative, absolute) = builder.resolve(tokens[1])?;
    let (dir_names, object_name) = object_location(&relative, builder.folder_name);

    tracing::debug!(path = %absolute, "Got object");
    let model = builder.current("OBJECT")?;
    model.dir_names = dir_names;
    model.object_name = object_name;
    model.representation = Representation::Object {
        path: absolute,
        texture: None,
        lit_texture: None,
    };
    Ok(())
}

fn texture(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("TEXTURE")?;
    expect_args(tokens, 2, "TEXTURE", "1 argument")?;

    let (_, absolute) = builder.resolve(tokens[1])?;
    tracing::debug!(path = %absolute, "Got texture");

    let model = builder.current("TEXTURE")?;
    model.texture_name = file_stem(&absolute).to_string();
    if let Representation::Object {
        texture,
        lit_texture,
        ..
    } = &mut model.representation
    {
        *lit_texture = Some(lit_texture_path(&absolute));
        *texture = Some(absolute);
    }
    Ok(())
}

fn aircraft(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.open(
        Representation::Legacy {
            path: String::new(),
        },
        DraftStatus::Inactive,
    );
    expect_args(tokens, 4, "AIRCRAFT", "3 arguments")?;

    let parse_version = |value: &str| {
        value
            .parse::<i32>()
            .map_err(|_| CommandError::InvalidArgument {
                command: "AIRCRAFT",
                value: value.to_string(),
                reason: "version must be an integer".to_string(),
            })
    };
    let min = parse_version(tokens[1])?;
    let max = parse_version(tokens[2])?;

    let sim = builder.host.sim_version();
    if sim < min || sim > max {
        tracing::debug!(sim, min, max, "Skipping aircraft for other simulator version");
        return Ok(());
    }

    let (_, absolute) = builder.resolve(tokens[3])?;
    tracing::debug!(path = %absolute, "Got airplane");
    builder.activate_current();
    builder.current("AIRCRAFT")?.representation = Representation::Legacy { path: absolute };
    Ok(())
}

fn obj8_aircraft(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.open(
        Representation::Obj8 {
            label: String::new(),
            attachments: Vec::new(),
        },
        DraftStatus::Active,
    );
    expect_args(tokens, 2, "OBJ8_AIRCRAFT", "1 argument")?;

    tracing::debug!(label = tokens[1], "Got OBJ8 airplane");
    if let Representation::Obj8 { label, .. } = &mut builder.current("OBJ8_AIRCRAFT")?.representation
    {
        *label = tokens[1].to_string();
    }
    Ok(())
}

fn obj8(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    if tokens.len() < 4 || tokens.len() > 6 {
        return Err(CommandError::WrongArgumentCount {
            command: "OBJ8",
            expected: "3 to 5 arguments",
        });
    }
    if !matches!(
        builder.current("OBJ8")?.representation,
        Representation::Obj8 { .. }
    ) {
        return Err(CommandError::NotObj8Model);
    }

    let layer: DrawLayer = tokens[1]
        .parse()
        .map_err(|reason| CommandError::InvalidArgument {
            command: "OBJ8",
            value: tokens[1].to_string(),
            reason,
        })?;
    let needs_animation = parse_yes_no("OBJ8", tokens[2])?;

    let (relative, source_file) = builder.resolve(tokens[3])?;
    let location =
        (layer == DrawLayer::Solid).then(|| object_location(&relative, builder.folder_name));

    let texture_file = match tokens.get(4) {
        Some(raw) => Some(builder.resolve(raw)?.1),
        None => None,
    };
    let lit_texture_file = match (tokens.get(5), &texture_file) {
        (Some(raw), _) => Some(builder.resolve(raw)?.1),
        (None, Some(texture)) => Some(lit_texture_path(texture)),
        (None, None) => None,
    };

    let model = builder.current("OBJ8")?;
    if let Some((dir_names, object_name)) = location {
        model.dir_names = dir_names;
        model.object_name = object_name;
    }
    if let Some(texture) = &texture_file {
        model.texture_name = file_stem(texture).to_string();
    }
    if let Representation::Obj8 { attachments, .. } = &mut model.representation {
        attachments.push(Attachment {
            layer,
            needs_animation,
            source_file,
            texture_file,
            lit_texture_file,
        });
    }
    Ok(())
}

fn vert_offset(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("VERT_OFFSET")?;
    expect_args(tokens, 2, "VERT_OFFSET", "1 argument")?;
    let offset = tokens[1]
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidArgument {
            command: "VERT_OFFSET",
            value: tokens[1].to_string(),
            reason: "must be a number of meters".to_string(),
        })?;
    builder.current("VERT_OFFSET")?.vert_offset = Some(offset);
    Ok(())
}

fn has_gear(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("HASGEAR")?;
    expect_args(tokens, 2, "HASGEAR", "one argument that must be YES or NO")?;
    let gear = parse_yes_no("HASGEAR", tokens[1])?;
    builder.current("HASGEAR")?.has_gear = gear;
    Ok(())
}

fn icao(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("ICAO")?;
    expect_args(tokens, 2, "ICAO", "1 argument")?;
    builder.register("ICAO", tokens[1], None, None, &[tier::ICAO, tier::GROUP])
}

fn airline(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("AIRLINE")?;
    expect_args(tokens, 3, "AIRLINE", "2 arguments")?;
    builder.register(
        "AIRLINE",
        tokens[1],
        Some(tokens[2]),
        None,
        &[tier::ICAO_AIRLINE, tier::GROUP_AIRLINE],
    )
}

fn livery(builder: &mut PackageBuilder<'_>, tokens: &[&str]) -> CommandResult {
    builder.current("LIVERY")?;
    expect_args(tokens, 4, "LIVERY", "3 arguments")?;
    builder.register(
        "LIVERY",
        tokens[1],
        Some(tokens[2]),
        Some(tokens[3]),
        &[tier::ICAO_AIRLINE_LIVERY, tier::GROUP_AIRLINE_LIVERY],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use crate::package::PackageRoot;

    const FOLDER: &str = "Bluebell_Airbus";

    fn roots() -> PackageRoots {
        vec![PackageRoot::new("__Bluebell", "/csl/Bluebell_Airbus")]
            .into_iter()
            .collect()
    }

    fn run(builder: &mut PackageBuilder<'_>, line: &str) -> CommandResult {
        let name = tokenize(line, super::super::MANIFEST_SEPARATORS, 0)[0];
        find_command(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?
            .run(builder, line)
    }

    #[test]
    fn test_command_table_lookup() {
        assert_eq!(find_command("OBJECT").unwrap().max_tokens, 2);
        assert_eq!(find_command("AIRCRAFT").unwrap().max_tokens, 4);
        assert!(find_command("object").is_none());
        assert!(find_command("OBJ9").is_none());
    }

    #[test]
    fn test_error_scopes() {
        assert_eq!(
            CommandError::UnknownCommand("X".to_string()).scope(),
            ErrorScope::Model
        );
        assert_eq!(
            CommandError::Path(PathError::PackageNotFound("x".to_string())).scope(),
            ErrorScope::Package
        );
        assert_eq!(
            CommandError::MissingDependency("x".to_string()).scope(),
            ErrorScope::Dependency
        );
    }

    #[test]
    fn test_object_location() {
        let (dirs, name) = object_location("__Bluebell/A320/DLH/a320.obj", FOLDER);
        assert_eq!(dirs, vec!["Bluebell_Airbus", "A320", "DLH"]);
        assert_eq!(name, "a320");
    }

    #[test]
    fn test_object_from_other_package_names_declaring_folder() {
        let roots: PackageRoots = vec![
            PackageRoot::new("__Bluebell", "/csl/Bluebell_Airbus"),
            PackageRoot::new("__Extras", "/csl/Bluebell_Extras"),
        ]
        .into_iter()
        .collect();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, "Bluebell_Extras", &groups, &host);

        run(&mut builder, "OBJECT __Bluebell/A320/a320.obj").unwrap();
        run(&mut builder, "OBJ8_AIRCRAFT neo").unwrap();
        run(&mut builder, "OBJ8 SOLID YES __Bluebell/A20N/a20n.obj").unwrap();
        let contents = builder.finish();

        assert_eq!(contents.models[0].dir_names, vec!["Bluebell_Extras", "A320"]);
        assert_eq!(contents.models[0].file_path(), "/csl/Bluebell_Airbus/A320/a320.obj");
        assert_eq!(contents.models[1].dir_names, vec!["Bluebell_Extras", "A20N"]);
        assert_eq!(contents.models[1].object_name, "a20n");
    }

    #[test]
    fn test_object_and_texture() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJECT __Bluebell/A320/a320.obj").unwrap();
        run(&mut builder, "TEXTURE __Bluebell/A320/DLH.png").unwrap();
        let contents = builder.finish();

        let model = &contents.models[0];
        assert_eq!(model.object_name, "a320");
        assert_eq!(model.texture_name, "DLH");
        assert_eq!(model.file_path(), "/csl/Bluebell_Airbus/A320/a320.obj");
        assert_eq!(
            model.lit_texture_path(),
            Some("/csl/Bluebell_Airbus/A320/DLH_LIT.png")
        );
    }

    #[test]
    fn test_registration_first_writer_wins() {
        let roots = roots();
        let groups = GroupingTable::parse("A319 A320 A321\n");
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJ8_AIRCRAFT first").unwrap();
        run(&mut builder, "AIRLINE A320 DLH").unwrap();
        run(&mut builder, "OBJ8_AIRCRAFT second").unwrap();
        run(&mut builder, "AIRLINE A320 DLH").unwrap();
        let contents = builder.finish();

        assert_eq!(contents.indices[tier::ICAO_AIRLINE].get("A320 DLH"), Some(0));
        assert_eq!(
            contents.indices[tier::GROUP_AIRLINE].get("A319 A320 A321 DLH"),
            Some(0)
        );
        assert_eq!(contents.indices[tier::ICAO_AIRLINE].len(), 1);
    }

    #[test]
    fn test_errored_model_releases_its_keys() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJ8_AIRCRAFT broken").unwrap();
        run(&mut builder, "ICAO A320").unwrap();
        assert!(run(&mut builder, "HASGEAR MAYBE").is_err());
        builder.flag_current();
        run(&mut builder, "OBJ8_AIRCRAFT good").unwrap();
        run(&mut builder, "ICAO A320").unwrap();
        let contents = builder.finish();

        assert_eq!(contents.models.len(), 1);
        assert_eq!(contents.dropped, 1);
        assert_eq!(contents.indices[tier::ICAO].get("A320"), Some(0));
        assert_eq!(contents.models[0].file_path(), "good");
    }

    #[test]
    fn test_group_keys_only_with_group() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJ8_AIRCRAFT a").unwrap();
        run(&mut builder, "LIVERY B738 SWA SHAMU").unwrap();
        let contents = builder.finish();

        assert_eq!(contents.indices[tier::ICAO_AIRLINE_LIVERY].get("B738 SWA SHAMU"), Some(0));
        assert!(contents.indices[tier::GROUP_AIRLINE_LIVERY].is_empty());
        assert!(contents.indices[tier::ICAO_LIVERY].is_empty());
        assert!(contents.indices[tier::GROUP_LIVERY].is_empty());
        assert_eq!(contents.models[0].livery.as_deref(), Some("SHAMU"));
    }

    #[test]
    fn test_commands_without_model() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        assert_eq!(
            run(&mut builder, "ICAO B738"),
            Err(CommandError::NoOpenModel("ICAO"))
        );
        assert_eq!(
            run(&mut builder, "OBJ8 SOLID YES __Bluebell/a.obj"),
            Err(CommandError::NoOpenModel("OBJ8"))
        );
        assert_eq!(builder.opened(), 0);
    }

    #[test]
    fn test_obj8_requires_obj8_model() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJECT __Bluebell/A320/a320.obj").unwrap();
        assert_eq!(
            run(&mut builder, "OBJ8 SOLID YES __Bluebell/A320/a320.obj"),
            Err(CommandError::NotObj8Model)
        );
    }

    #[test]
    fn test_obj8_attachment() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJ8_AIRCRAFT A320_DLH").unwrap();
        run(
            &mut builder,
            "OBJ8 SOLID YES __Bluebell/A320/a320.obj __Bluebell/A320/DLH.png",
        )
        .unwrap();
        run(&mut builder, "OBJ8 GLASS NO __Bluebell/A320/glass.obj").unwrap();
        let contents = builder.finish();

        let model = &contents.models[0];
        assert_eq!(model.dir_names, vec!["Bluebell_Airbus", "A320"]);
        assert_eq!(model.object_name, "a320");
        assert_eq!(model.texture_name, "DLH");

        let attachments = model.attachments();
        assert_eq!(attachments.len(), 2);
        assert_eq!(attachments[0].layer, DrawLayer::Solid);
        assert!(attachments[0].needs_animation);
        assert_eq!(
            attachments[0].lit_texture_file.as_deref(),
            Some("/csl/Bluebell_Airbus/A320/DLH_LIT.png")
        );
        assert_eq!(attachments[1].layer, DrawLayer::Glass);
        assert!(attachments[1].texture_file.is_none());
        assert!(attachments[1].lit_texture_file.is_none());
    }

    #[test]
    fn test_aircraft_version_range() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::new(11550);
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "AIRCRAFT 10000 10999 __Bluebell/old.acf").unwrap();
        run(&mut builder, "ICAO B712").unwrap();
        run(&mut builder, "AIRCRAFT 11000 11999 __Bluebell/new.acf").unwrap();
        run(&mut builder, "ICAO B712").unwrap();
        let contents = builder.finish();

        assert_eq!(contents.models.len(), 1);
        assert_eq!(contents.dropped, 0);
        assert_eq!(contents.models[0].file_path(), "/csl/Bluebell_Airbus/new.acf");
        assert_eq!(contents.indices[tier::ICAO].get("B712"), Some(0));
    }

    #[test]
    fn test_aircraft_bad_version() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        let err = run(&mut builder, "AIRCRAFT six 12 __Bluebell/a.acf").unwrap_err();
        assert!(matches!(err, CommandError::InvalidArgument { .. }));
    }

    #[test]
    fn test_vert_offset_and_gear() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        run(&mut builder, "OBJ8_AIRCRAFT c172").unwrap();
        run(&mut builder, "VERT_OFFSET 1.25").unwrap();
        run(&mut builder, "HASGEAR NO").unwrap();
        assert!(run(&mut builder, "VERT_OFFSET high").is_err());
        let contents = builder.finish();

        assert_eq!(contents.models[0].vert_offset, Some(1.25));
        assert!(!contents.models[0].has_gear);
    }

    #[test]
    fn test_unknown_package_is_path_error() {
        let roots = roots();
        let groups = GroupingTable::new();
        let host = StaticHost::default();
        let mut builder = PackageBuilder::new(&roots, FOLDER, &groups, &host);

        let err = run(&mut builder, "OBJECT __Other/a.obj").unwrap_err();
        assert_eq!(err.scope(), ErrorScope::Package);
        assert_eq!(builder.opened(), 1);
    }
}
