//! Decides what the current user may do to another chat member,
//! given both of their member statuses.

use crate::message::MemberStatus;

/// What the current user can do about another member's restrictions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestrictMode {
    None,
    /// The member isn't restricted yet and can be restricted or banned.
    New,
    /// The member is already restricted or banned and the restrictions can be edited.
    Edit,
    /// The member's restrictions can be viewed but not changed.
    View,
}

/// What the current user can do about another member's admin rights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromoteMode {
    None,
    /// The member isn't an admin and can be promoted.
    New,
    Edit,
    View,
}

/// Computes the restrict mode that `me` has over `other`.
pub fn restrict_mode(me: &MemberStatus, other: &MemberStatus) -> RestrictMode {
    match other {
        MemberStatus::Creator { .. } => RestrictMode::None,
        MemberStatus::Administrator { can_be_edited, .. } => {
            if me.is_creator() || (*can_be_edited && me.can_restrict_members()) {
                RestrictMode::New
            } else {
                RestrictMode::None
            }
        }
        MemberStatus::Restricted { .. } | MemberStatus::Banned => {
            if me.can_restrict_members() {
                RestrictMode::Edit
            } else if me.is_admin() {
                RestrictMode::View
            } else {
                RestrictMode::None
            }
        }
        MemberStatus::Member | MemberStatus::Left => {
            if me.can_restrict_members() {
                RestrictMode::New
            } else {
                RestrictMode::None
            }
        }
    }
}

/// Computes the promote mode that `me` has over `other`.
pub fn promote_mode(me: &MemberStatus, other: &MemberStatus) -> PromoteMode {
    match other {
        MemberStatus::Creator { .. } => {
            if me.is_creator() { PromoteMode::None } else { PromoteMode::View }
        }
        MemberStatus::Administrator { can_be_edited, .. } => {
            if me.is_creator() || (*can_be_edited && me.can_promote_members()) {
                PromoteMode::Edit
            } else {
                PromoteMode::View
            }
        }
        MemberStatus::Member | MemberStatus::Restricted { .. } => {
            if me.can_promote_members() { PromoteMode::New } else { PromoteMode::None }
        }
        MemberStatus::Left | MemberStatus::Banned => PromoteMode::None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    const CREATOR: MemberStatus = MemberStatus::Creator { is_member: true };
    const MODERATOR: MemberStatus = MemberStatus::Administrator {
        can_be_edited: false,
        can_restrict_members: true,
        can_promote_members: false,
    };
    const JANITOR: MemberStatus = MemberStatus::Administrator {
        can_be_edited: false,
        can_restrict_members: false,
        can_promote_members: false,
    };

    #[test]
    fn nobody_restricts_the_creator() {
        assert_eq!(restrict_mode(&CREATOR, &CREATOR), RestrictMode::None);
        assert_eq!(restrict_mode(&MODERATOR, &CREATOR), RestrictMode::None);
    }

    #[test]
    fn restrict_modes_follow_target_status() {
        assert_eq!(restrict_mode(&MODERATOR, &MemberStatus::Member), RestrictMode::New);
        assert_eq!(restrict_mode(&MODERATOR, &MemberStatus::Banned), RestrictMode::Edit);
        assert_eq!(restrict_mode(&JANITOR, &MemberStatus::Banned), RestrictMode::View);
        assert_eq!(restrict_mode(&JANITOR, &MemberStatus::Member), RestrictMode::None);
        assert_eq!(restrict_mode(&MemberStatus::Member, &MemberStatus::Banned), RestrictMode::None);
    }

    #[test]
    fn only_editable_admins_can_be_restricted() {
        let editable = MemberStatus::Administrator {
            can_be_edited: true,
            can_restrict_members: false,
            can_promote_members: false,
        };
        assert_eq!(restrict_mode(&MODERATOR, &editable), RestrictMode::New);
        assert_eq!(restrict_mode(&MODERATOR, &JANITOR), RestrictMode::None);
        assert_eq!(restrict_mode(&CREATOR, &JANITOR), RestrictMode::New);
    }

    #[test]
    fn promote_modes() {
        assert_eq!(promote_mode(&CREATOR, &JANITOR), PromoteMode::Edit);
        assert_eq!(promote_mode(&MODERATOR, &JANITOR), PromoteMode::View);
        assert_eq!(promote_mode(&MODERATOR, &CREATOR), PromoteMode::View);
        assert_eq!(promote_mode(&CREATOR, &MemberStatus::Member), PromoteMode::New);
        assert_eq!(promote_mode(&MODERATOR, &MemberStatus::Member), PromoteMode::None);
    }
}
