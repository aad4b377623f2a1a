// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs, Debug, Default)]
/// bedmerge - Merge exon and intron interval tables into sorted per-build BED files
pub struct Args {
    /// base directory that relative input and output paths resolve against (default: .)
    #[argh(option)]
    pub base_dir: Option<String>,

    /// genome build to process; repeat for several (default: all configured builds)
    #[argh(option)]
    pub build: Vec<String>,

    /// exon table for a single explicit merge (requires --intron and --output)
    #[argh(option)]
    pub exon: Option<String>,

    /// intron table for a single explicit merge (requires --exon and --output)
    #[argh(option)]
    pub intron: Option<String>,

    /// output BED file for a single explicit merge (requires --exon and --intron)
    #[argh(option)]
    pub output: Option<String>,

    /// merge builds concurrently
    #[argh(switch)]
    pub parallel: bool,

    /// number of threads for --parallel (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// keep processing remaining builds after one fails
    #[argh(switch)]
    pub keep_going: bool,

    /// write a JSON run summary to this file
    #[argh(option)]
    pub summary: Option<String>,

    /// validate inputs and schemas without writing any output
    #[argh(switch)]
    pub dry_run: bool,

    /// search a merged BED file instead of merging
    #[argh(option)]
    pub search: Option<String>,

    /// coordinate to look up with --search, e.g. chr7:55242465
    #[argh(option)]
    pub at: Option<String>,

    /// case-insensitive text to look for in any column with --search
    #[argh(option)]
    pub term: Option<String>,

    /// case-insensitive substring filter on one column with --search, as column=value; repeatable
    #[argh(option)]
    pub filter: Vec<String>,

    /// case-insensitive exact filter on one column with --search, as column=value; repeatable
    #[argh(option)]
    pub exact_filter: Vec<String>,

    /// write the search hits as a headed TSV to this file or directory
    #[argh(option)]
    pub export: Option<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
