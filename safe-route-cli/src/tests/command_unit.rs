//! Subcommand naming, which fixes the environment variable prefix.

use super::*;
use crate::route::RouteArgs;
use crate::select::SelectArgs;
use crate::spots::SpotsArgs;
use clap::CommandFactory;
use rstest::rstest;

#[rstest]
#[case::select(SelectArgs::command, "select", ENV_SELECT_REQUEST)]
#[case::spots(SpotsArgs::command, "spots", ENV_SPOTS_LAT)]
#[case::route(RouteArgs::command, "route", ENV_ROUTE_FROM_LAT)]
fn subcommand_names_match_their_env_prefix(
    #[case] command: fn() -> clap::Command,
    #[case] name: &str,
    #[case] env_var: &str,
) {
    assert_eq!(command().get_name(), name);
    let prefix = format!("SAFE_ROUTE_CMDS_{}_", name.to_uppercase());
    assert!(env_var.starts_with(&prefix), "{env_var} lacks {prefix}");
}
