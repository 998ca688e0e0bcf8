// ABOUTME: External collaborator seams for onboarding side effects
// Consent notification and account provisioning are immediate no-op successes in the demo

use anyhow::Result;
#[cfg(test)]
use mockall::automock;
use tracing::info;

/// The record handed to account provisioning once the wizard completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub full_name: String,
    pub date_of_birth: String,
    pub pin: String,
}

/// Sends a consent request to a parent or guardian. The contact address
/// format is deliberately unchecked, matching the reference behavior.
#[cfg_attr(test, automock)]
pub trait ConsentNotifier {
    fn notify_parent(&self, contact: &str) -> Result<()>;
}

/// Provisions the new account after onboarding completes.
#[cfg_attr(test, automock)]
pub trait AccountProvisioner {
    fn provision_account(&self, details: &AccountDetails) -> Result<()>;
}

/// Demo notifier: logs the request and reports success without any
/// external round trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopConsentNotifier;

impl ConsentNotifier for NoopConsentNotifier {
    fn notify_parent(&self, contact: &str) -> Result<()> {
        info!(contact, "consent request sent to guardian");
        Ok(())
    }
}

/// Demo provisioner: logs the handoff and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAccountProvisioner;

impl AccountProvisioner for NoopAccountProvisioner {
    fn provision_account(&self, details: &AccountDetails) -> Result<()> {
        info!(full_name = %details.full_name, "provisioning demo account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_collaborators_succeed() {
        let notifier = NoopConsentNotifier;
        assert!(notifier.notify_parent("parent@example.com").is_ok());

        let provisioner = NoopAccountProvisioner;
        let details = AccountDetails {
            full_name: "Alex Doe".to_string(),
            date_of_birth: "2010-05-17".to_string(),
            pin: "1234".to_string(),
        };
        assert!(provisioner.provision_account(&details).is_ok());
    }

    #[test]
    fn test_mock_notifier_receives_contact() {
        let mut notifier = MockConsentNotifier::new();
        notifier
            .expect_notify_parent()
            .withf(|contact| contact == "parent@example.com")
            .times(1)
            .returning(|_| Ok(()));
        assert!(notifier.notify_parent("parent@example.com").is_ok());
    }
}
