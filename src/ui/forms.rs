use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{Family, FamilyId, Member, MemberId, NewMember};
use crate::roster::Roster;

/// Label of the picker entry that leaves a member unassigned.
pub(crate) const UNASSIGNED_LABEL: &str = "Unassigned (Unknown)";

/// Draft for adding or renaming a family.
#[derive(Default, Clone)]
pub(crate) struct FamilyForm {
    pub(crate) name: String,
    pub(crate) error: Option<String>,
}

impl FamilyForm {
    pub(crate) fn from_family(family: &Family) -> Self {
        Self {
            name: family.name.clone(),
            error: None,
        }
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.name.push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.name.pop();
    }

    /// The trimmed name, or an error the form can show inline.
    pub(crate) fn parse_inputs(&self) -> Result<String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Family name is required."));
        }
        Ok(name.to_string())
    }

    pub(crate) fn build_line(&self) -> Line<'static> {
        let (display, style) = if self.name.is_empty() {
            ("<required>".to_string(), Style::default().fg(Color::DarkGray))
        } else {
            (self.name.clone(), Style::default().fg(Color::Yellow))
        };
        Line::from(vec![Span::raw("Name: "), Span::styled(display, style)])
    }

    pub(crate) fn value_len(&self) -> usize {
        self.name.chars().count()
    }
}

/// One entry of the family picker in the member form.
#[derive(Clone)]
pub(crate) struct FamilyChoice {
    pub(crate) id: Option<FamilyId>,
    pub(crate) label: String,
}

/// Fields of the member form, in focus order.
#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub(crate) enum MemberField {
    #[default]
    FirstName,
    LastName,
    Family,
}

/// Draft for adding or editing a member.
#[derive(Clone)]
pub(crate) struct MemberForm {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) choices: Vec<FamilyChoice>,
    pub(crate) family_index: usize,
    pub(crate) active: MemberField,
    pub(crate) error: Option<String>,
}

impl MemberForm {
    /// Empty form whose picker starts on "Unassigned".
    pub(crate) fn new(roster: &Roster) -> Self {
        let mut choices = vec![FamilyChoice {
            id: None,
            label: UNASSIGNED_LABEL.to_string(),
        }];
        choices.extend(roster.families_by_name().into_iter().map(|f| FamilyChoice {
            id: Some(f.id),
            label: f.name.clone(),
        }));
        Self {
            first_name: String::new(),
            last_name: String::new(),
            choices,
            family_index: 0,
            active: MemberField::FirstName,
            error: None,
        }
    }

    /// Form seeded from an existing member. A family id that no longer
    /// resolves shows as "Unassigned".
    pub(crate) fn from_member(member: &Member, roster: &Roster) -> Self {
        let mut form = Self::new(roster);
        form.first_name = member.first_name.clone();
        form.last_name = member.last_name.clone();
        form.family_index = form
            .choices
            .iter()
            .position(|choice| choice.id.is_some() && choice.id == member.family_id)
            .unwrap_or(0);
        form
    }

    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            MemberField::FirstName => MemberField::LastName,
            MemberField::LastName => MemberField::Family,
            MemberField::Family => MemberField::FirstName,
        };
    }

    /// Step through the family picker, wrapping at either end.
    pub(crate) fn cycle_family(&mut self, offset: isize) {
        if self.choices.is_empty() {
            return;
        }
        let len = self.choices.len() as isize;
        self.family_index = (self.family_index as isize + offset).rem_euclid(len) as usize;
    }

    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self.active {
            MemberField::FirstName => self.first_name.push(ch),
            MemberField::LastName => self.last_name.push(ch),
            MemberField::Family => return false,
        }
        true
    }

    pub(crate) fn backspace(&mut self) {
        match self.active {
            MemberField::FirstName => {
                self.first_name.pop();
            }
            MemberField::LastName => {
                self.last_name.pop();
            }
            MemberField::Family => {}
        }
    }

    pub(crate) fn selected_family(&self) -> Option<FamilyId> {
        self.choices.get(self.family_index).and_then(|c| c.id)
    }

    /// Validate a brand new member; both names are required.
    pub(crate) fn parse_new_member(&self) -> Result<NewMember> {
        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            return Err(anyhow!("First name is required."));
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            return Err(anyhow!("Last name is required."));
        }
        Ok(NewMember {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            family_id: self.selected_family(),
        })
    }

    pub(crate) fn build_line(&self, field: MemberField) -> Line<'static> {
        let is_active = self.active == field;
        let (field_name, value) = match field {
            MemberField::FirstName => ("First name", self.first_name.clone()),
            MemberField::LastName => ("Last name", self.last_name.clone()),
            MemberField::Family => {
                let label = self
                    .choices
                    .get(self.family_index)
                    .map(|c| c.label.clone())
                    .unwrap_or_else(|| UNASSIGNED_LABEL.to_string());
                ("Family", format!("< {label} >"))
            }
        };

        let display = if value.is_empty() {
            "<required>".to_string()
        } else {
            value.clone()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{field_name}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: MemberField) -> usize {
        match field {
            MemberField::FirstName => self.first_name.chars().count(),
            MemberField::LastName => self.last_name.chars().count(),
            MemberField::Family => 0,
        }
    }
}

pub(crate) struct ConfirmFamilyDelete {
    pub(crate) id: FamilyId,
    pub(crate) name: String,
    pub(crate) member_count: usize,
}

pub(crate) struct ConfirmMemberDelete {
    pub(crate) id: MemberId,
    pub(crate) label: String,
}

impl From<&Member> for ConfirmMemberDelete {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            label: format!("{} {}", member.first_name, member.last_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_form_requires_a_name() {
        let mut form = FamilyForm::default();
        for ch in "   ".chars() {
            form.push_char(ch);
        }
        assert!(form.parse_inputs().is_err());

        form.name = "  Williams ".into();
        assert_eq!(form.parse_inputs().unwrap(), "Williams");
    }

    #[test]
    fn member_form_picker_wraps_and_lists_families_by_name() {
        let mut roster = Roster::new();
        let smith = roster.add_family("Smith").unwrap();
        let garcia = roster.add_family("Garcia").unwrap();

        let mut form = MemberForm::new(&roster);
        let labels: Vec<&str> = form.choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, [UNASSIGNED_LABEL, "Garcia", "Smith"]);

        form.cycle_family(-1);
        assert_eq!(form.selected_family(), Some(smith));
        form.cycle_family(2);
        assert_eq!(form.selected_family(), Some(garcia));
    }

    #[test]
    fn member_form_reports_the_missing_name() {
        let roster = Roster::new();
        let mut form = MemberForm::new(&roster);
        form.first_name = "David".into();
        let err = form.parse_new_member().unwrap_err();
        assert_eq!(err.to_string(), "Last name is required.");

        form.last_name = " Miller ".into();
        let new = form.parse_new_member().unwrap();
        assert_eq!(new.last_name, "Miller");
        assert_eq!(new.family_id, None);
    }

    #[test]
    fn editing_form_preselects_the_members_family() {
        let mut roster = Roster::new();
        let smith = roster.add_family("Smith").unwrap();
        let id = roster
            .add_member(NewMember::new("John", "Smith").in_family(smith))
            .unwrap();

        let form = MemberForm::from_member(roster.member(id).unwrap(), &roster);
        assert_eq!(form.selected_family(), Some(smith));
        assert_eq!(form.first_name, "John");
    }
}
