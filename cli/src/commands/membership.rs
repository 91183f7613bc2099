use gymkit_common::clock::Clock;
use gymkit_common::config::Config;
use gymkit_common::{success, warn};
use gymkit_core::Membership;
use gymkit_core::membership::DEFAULT_DURATION_MONTHS;

use crate::commands::MembershipArgs;
use crate::terminal::{format, print};

pub fn membership(args: MembershipArgs, cfg: &Config) -> anyhow::Result<()> {
    let clock: Box<dyn Clock> = cfg.clock();
    let mut membership: Membership = build(&args, clock.as_ref())?;

    if let Some(months) = args.extend {
        if months <= 0 {
            warn!("Extending by {months} months moves the end date backwards or not at all");
        }
        membership.extend_membership(months)?;
        success!("Membership {} extended by {months} months", membership.member_id());
    }

    if args.active {
        membership.set_active(true);
    }

    if membership.end_date() < membership.start_date() {
        warn!("Membership {} ends before it starts", membership.member_id());
    }

    if print::shows_details(cfg) {
        let title: String = format!("Member {}", membership.member_id());
        print::entry(0, &title, format::membership_to_details(&membership, clock.as_ref()));
    }

    print::summary(membership.status(clock.as_ref()));
    Ok(())
}

fn build(args: &MembershipArgs, clock: &dyn Clock) -> anyhow::Result<Membership> {
    let membership = match (args.start, args.months) {
        (Some(start), months) => {
            let start = start.and_time(chrono::NaiveTime::MIN);
            Membership::new(args.id, start, months.unwrap_or(DEFAULT_DURATION_MONTHS))?
        }
        (None, Some(months)) => Membership::new(args.id, clock.now(), months)?,
        (None, None) if args.id == 0 => Membership::with_defaults(clock)?,
        (None, None) => Membership::for_member(args.id, clock)?,
    };
    Ok(membership)
}
