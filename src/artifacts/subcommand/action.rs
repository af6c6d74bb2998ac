use crate::artifacts::branch::branch_name::BranchName;

/// Effect of a tracked version-control subcommand on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubCommandAction {
    /// Repository bookkeeping with no diagram counterpart.
    Ignore,
    Tag(String),
    DeleteBranch(BranchName),
    CreateBranch(BranchName),
    CreateAndCheckout(BranchName),
    Checkout(BranchName),
    Merge(BranchName),
}

impl SubCommandAction {
    pub fn ignore(_: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::Ignore)
    }

    pub fn tag(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::Tag(first_arg(args)?.to_string()))
    }

    pub fn delete_branch(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::DeleteBranch(branch_arg(args)?))
    }

    pub fn create_branch(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::CreateBranch(branch_arg(args)?))
    }

    pub fn create_and_checkout(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::CreateAndCheckout(branch_arg(args)?))
    }

    pub fn checkout(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::Checkout(branch_arg(args)?))
    }

    pub fn merge(args: &[&str]) -> anyhow::Result<Self> {
        Ok(SubCommandAction::Merge(branch_arg(args)?))
    }
}

fn first_arg<'a>(args: &[&'a str]) -> anyhow::Result<&'a str> {
    args.first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("subcommand pattern captured no argument"))
}

fn branch_arg(args: &[&str]) -> anyhow::Result<BranchName> {
    BranchName::try_parse(first_arg(args)?)
}
