// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// mcclean - Legislator roster CSV cleaner
pub struct Args {
    /// path to the mcatts roster CSV to clean
    #[argh(option)]
    pub mcatts: Option<String>,

    /// path to the reference legislators CSV (voteview.com schema)
    #[argh(option)]
    pub legislators: Option<String>,

    /// destination path for the cleaned CSV
    #[argh(option)]
    pub output: Option<String>,

    /// legislator identifier column, shared by both tables (default: id)
    #[argh(option, default = "String::from(\"id\")")]
    pub id_column: String,

    /// congress column in the roster (default: cong)
    #[argh(option, default = "String::from(\"cong\")")]
    pub congress_column: String,

    /// congress column in the reference table (default: congress)
    #[argh(option, default = "String::from(\"congress\")")]
    pub reference_congress_column: String,

    /// member name column in the roster (default: mc.name)
    #[argh(option, default = "String::from(\"mc.name\")")]
    pub name_column: String,

    /// name column in the reference table (default: name)
    #[argh(option, default = "String::from(\"name\")")]
    pub reference_name_column: String,

    /// state code column in the roster (default: state)
    #[argh(option, default = "String::from(\"state\")")]
    pub state_column: String,

    /// state code column in the reference table (default: state)
    #[argh(option, default = "String::from(\"state\")")]
    pub reference_state_column: String,

    /// denormalized state-name column to prune (default: statenm)
    #[argh(option, default = "String::from(\"statenm\")")]
    pub statenm_column: String,

    /// skip the reference merge; run accent stripping and pruning only
    #[argh(switch)]
    pub no_merge: bool,

    /// warn instead of failing when the pruned column is absent
    #[argh(switch)]
    pub lenient_prune: bool,

    /// write unmatched roster entries to a CSV log
    #[argh(option)]
    pub unmatched_log: Option<String>,

    /// validate inputs without writing output (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
