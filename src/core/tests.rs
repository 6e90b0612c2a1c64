#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::core::dispatch::testing::RecordingOpener;
    use crate::core::{
        BookingDraft, BookingError, BookingWizard, DraftField, INKSPIRE, WizardStep,
        dispatch_booking, service_catalog,
    };

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("'{needle}' missing from payload:\n{haystack}"))
    }

    #[test]
    fn test_full_booking_flow() {
        let mut wizard = BookingWizard::start(service_catalog(), today(), None);
        assert_eq!(wizard.step(), WizardStep::SelectingService);

        wizard.select_service("web-dev").unwrap();
        assert_eq!(wizard.advance(), Ok(WizardStep::SchedulingTime));

        wizard.set_field(DraftField::Date, "2025-06-01").unwrap();
        wizard.set_field(DraftField::Time, "10:00 AM").unwrap();
        assert_eq!(wizard.advance(), Ok(WizardStep::EnteringContact));

        wizard.set_field(DraftField::Name, "Neema Joseph").unwrap();
        wizard.set_field(DraftField::Email, "neema@example.com").unwrap();
        wizard.set_field(DraftField::Phone, "0712 345 678").unwrap();
        wizard
            .set_field(DraftField::Message, "Online shop for my bakery")
            .unwrap();

        let submission = wizard.submit(&INKSPIRE).unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirmed);

        let text = &submission.text;
        let title = position(text, "Web Development");
        let date = position(text, "2025-06-01");
        let time = position(text, "10:00 AM");
        let phone = position(text, "0712 345 678");
        assert!(title < date && date < time && time < phone);
        assert!(text.contains("Online shop for my bakery"));

        assert!(
            submission
                .whatsapp_url
                .starts_with("https://wa.me/255738644881?text=")
        );
        let encoded = submission
            .whatsapp_url
            .split_once("?text=")
            .map(|(_, q)| q)
            .unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), text.as_str());

        let opener = RecordingOpener::default();
        dispatch_booking(&opener, &submission);
        assert_eq!(opener.opened.borrow().as_slice(), [submission.whatsapp_url.clone()]);
    }

    #[test]
    fn test_navigation_round_trip_keeps_draft() {
        let mut wizard = BookingWizard::start(service_catalog(), today(), Some("security"));
        assert_eq!(wizard.step(), WizardStep::SchedulingTime);

        wizard.set_field(DraftField::Date, "2025-05-20").unwrap();
        wizard.set_field(DraftField::Time, "04:00 PM").unwrap();
        wizard.advance().unwrap();
        wizard.set_field(DraftField::Name, "Juma").unwrap();

        let before = wizard.draft().clone();
        assert_eq!(wizard.retreat(), WizardStep::SchedulingTime);
        assert_eq!(wizard.retreat(), WizardStep::SelectingService);
        assert_eq!(wizard.retreat(), WizardStep::SelectingService);
        assert_eq!(wizard.advance(), Ok(WizardStep::SchedulingTime));
        assert_eq!(wizard.advance(), Ok(WizardStep::EnteringContact));
        assert_eq!(wizard.draft(), &before);
    }

    #[test]
    fn test_incomplete_contact_blocks_submit() {
        let mut wizard = BookingWizard::start(service_catalog(), today(), Some("seo"));
        wizard.set_field(DraftField::Date, "2025-07-01").unwrap();
        wizard.set_field(DraftField::Time, "09:00 AM").unwrap();
        wizard.advance().unwrap();
        wizard.set_field(DraftField::Name, "Juma").unwrap();
        wizard.set_field(DraftField::Email, "juma@example.com").unwrap();

        let err = wizard.submit(&INKSPIRE).unwrap_err();
        assert_eq!(err, BookingError::MissingField { field: DraftField::Phone });
        assert_eq!(wizard.step(), WizardStep::EnteringContact);
    }

    #[test]
    fn test_reset_after_confirmation() {
        let mut wizard = BookingWizard::start(service_catalog(), today(), Some("mobile"));
        wizard.set_field(DraftField::Date, "2025-06-10").unwrap();
        wizard.set_field(DraftField::Time, "11:00 AM").unwrap();
        wizard.advance().unwrap();
        for (field, value) in [
            (DraftField::Name, "Asha"),
            (DraftField::Email, "asha@example.com"),
            (DraftField::Phone, "0620 000 000"),
        ] {
            wizard.set_field(field, value).unwrap();
        }
        wizard.submit(&INKSPIRE).unwrap();
        assert_eq!(wizard.step(), WizardStep::Confirmed);

        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::SelectingService);
        assert_eq!(wizard.draft(), &BookingDraft::new());
    }

    #[test]
    fn test_single_page_form_shares_the_payload() {
        let mut draft = BookingDraft::new();
        for (field, value) in [
            (DraftField::Date, "2025-06-01"),
            (DraftField::Time, "10:00 AM"),
            (DraftField::Name, "Neema Joseph"),
            (DraftField::Email, "neema@example.com"),
            (DraftField::Phone, "0712 345 678"),
            (DraftField::Message, "Online shop for my bakery"),
        ] {
            draft.set(field, value).unwrap();
        }
        draft.service_id = Some("web-dev".to_string());

        let from_form = draft.compose(service_catalog(), today(), &INKSPIRE).unwrap();

        let mut wizard = BookingWizard::start(service_catalog(), today(), Some("web-dev"));
        for field in DraftField::ALL {
            wizard.set_field(field, &draft.value_of(field)).unwrap();
        }
        wizard.advance().unwrap();
        let from_wizard = wizard.submit(&INKSPIRE).unwrap();

        assert_eq!(from_form, from_wizard);
    }
}
