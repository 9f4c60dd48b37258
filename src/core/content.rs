//! Static content tables for the marketing site
//!
//! Everything here is compile-time data: navigation links, feature cards,
//! headline stats, pricing plans and the legal documents. Nothing is mutated
//! at runtime.

/// A navigation menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Route path or landing-page anchor (`/#section`)
    pub href: &'static str,
}

impl NavLink {
    /// Whether this link scrolls to a landing-page section instead of changing route
    pub fn is_anchor(&self) -> bool {
        self.href.contains('#')
    }
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        href: "/",
    },
    NavLink {
        label: "Features",
        href: "/#features",
    },
    NavLink {
        label: "Stats",
        href: "/#stats",
    },
    NavLink {
        label: "Pricing",
        href: "/#pricing",
    },
];

/// A feature card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Icon name under `/icons`
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "lightning",
        title: "Smart Generation",
        description: "Generate thumbnails optimized for YouTube algorithms and better CTR.",
    },
    Feature {
        icon: "eye",
        title: "Eye-catching Thumbnails",
        description: "Drive more views and subscribers with high-converting, click-worthy designs.",
    },
    Feature {
        icon: "palette",
        title: "Fully Customizable",
        description: "Fully customize every detail—style, color, and text—to match your brand.",
    },
];

/// A headline figure shown by the animated counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u64,
    /// Appended after the number, e.g. `"+"` or `"%"`
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: 152_847,
        suffix: "+",
        label: "Thumbnails Generated",
    },
    Stat {
        value: 8_432,
        suffix: "+",
        label: "Users Onboarded",
    },
];

/// A subscription plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    /// Price in whole US dollars
    pub price: u32,
    /// Billing period, shown as `/month`
    pub period: &'static str,
    pub features: &'static [&'static str],
    pub most_popular: bool,
}

impl PricingPlan {
    /// Price label as shown on the card
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Period label as shown after the price
    pub fn period_label(&self) -> String {
        format!("/{}", self.period)
    }
}

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Basic",
        price: 29,
        period: "month",
        features: &[
            "50 AI thumbnails per month",
            "Basic templates",
            "Standard image quality",
            "No watermark",
            "Email support",
        ],
        most_popular: false,
    },
    PricingPlan {
        name: "Pro",
        price: 79,
        period: "month",
        features: &[
            "500 AI thumbnails per month",
            "Premium templates",
            "Upto 4k image quality",
            "No watermark",
            "Priority support",
            "Brand kit integration with AI",
        ],
        most_popular: true,
    },
    PricingPlan {
        name: "Enterprise",
        price: 199,
        period: "month",
        features: &[
            "Every feature of Pro +",
            "API access",
            "Team collaboration",
            "Custom branding",
            "Dedicated support",
        ],
        most_popular: false,
    },
];

/// Legal documents shown in a modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalDoc {
    Terms,
    Privacy,
}

impl LegalDoc {
    pub fn title(&self) -> &'static str {
        match self {
            LegalDoc::Terms => "Terms of Service",
            LegalDoc::Privacy => "Privacy Policy",
        }
    }

    /// Document body as markdown
    pub fn body(&self) -> &'static str {
        match self {
            LegalDoc::Terms => TERMS_OF_SERVICE,
            LegalDoc::Privacy => PRIVACY_POLICY,
        }
    }
}

const TERMS_OF_SERVICE: &str = r#"*Last updated: January 1, 2026*

## 1. Acceptance of Terms

By accessing and using Thumbly ("the Service"), you accept and agree to be
bound by the terms and provision of this agreement. If you do not agree to
these terms, please do not use our Service.

## 2. Use of Service

You agree to use the Service only for lawful purposes. You are prohibited from:

- Violating any applicable laws or regulations
- Infringing upon or violating our intellectual property rights
- Uploading or transmitting viruses or malicious code
- Attempting to gain unauthorized access to the Service
- Using the Service to create offensive or inappropriate content

## 3. User Accounts

You are responsible for maintaining the confidentiality of your account and
password. You agree to accept responsibility for all activities that occur
under your account.

## 4. Content Ownership

All thumbnails generated using Thumbly belong to you. However, you grant us a
license to use, modify, and display your content solely for the purpose of
operating and improving the Service.

## 5. Payment and Refunds

Subscription fees are billed in advance on a monthly or annual basis. Refunds
are provided within 14 days of purchase if you're not satisfied with the
Service.

## 6. Service Availability

We strive to maintain 99.9% uptime, but we do not guarantee uninterrupted
access to the Service. We reserve the right to modify or discontinue the
Service with or without notice.

## 7. Limitation of Liability

Thumbly shall not be liable for any indirect, incidental, special,
consequential, or punitive damages resulting from your use or inability to use
the Service.

## 8. Changes to Terms

We reserve the right to modify these terms at any time. We will notify users of
any material changes via email or through the Service.

## 9. Contact Information

If you have any questions about these Terms, please contact us at
support@thumbly.com
"#;

const PRIVACY_POLICY: &str = r#"*Last updated: January 1, 2026*

## 1. Information We Collect

We collect information you provide directly to us, including:

- Name and email address
- Account credentials
- Payment information (processed securely by third-party providers)
- Thumbnails and content you create
- Usage data and analytics

## 2. How We Use Your Information

We use the information we collect to:

- Provide, maintain, and improve our Service
- Process your transactions and send related information
- Send you technical notices and support messages
- Respond to your comments and questions
- Analyze usage patterns to improve user experience
- Detect and prevent fraud and abuse

## 3. Information Sharing

We do not sell, trade, or rent your personal information to third parties. We
may share your information only in the following circumstances:

- With your consent
- With service providers who assist in our operations
- To comply with legal obligations
- To protect our rights and prevent fraud

## 4. Data Security

We implement industry-standard security measures to protect your personal
information. All data is encrypted in transit using SSL/TLS and at rest using
AES-256 encryption.

## 5. Cookies and Tracking

We use cookies and similar tracking technologies to track activity on our
Service and hold certain information. You can instruct your browser to refuse
all cookies or to indicate when a cookie is being sent.

## 6. Data Retention

We retain your personal information for as long as necessary to provide the
Service and for legitimate business purposes. You can request deletion of your
account at any time.

## 7. Your Rights

You have the right to:

- Access your personal information
- Correct inaccurate data
- Request deletion of your data
- Object to processing of your data
- Export your data in a portable format

## 8. Children's Privacy

Our Service is not intended for users under 13 years of age. We do not
knowingly collect personal information from children under 13.

## 9. Changes to Privacy Policy

We may update our Privacy Policy from time to time. We will notify you of any
changes by posting the new Privacy Policy on this page and updating the "Last
updated" date.

## 10. Contact Us

If you have any questions about this Privacy Policy, please contact us at
privacy@thumbly.com
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_has_three_plans_in_order() {
        let names: Vec<_> = PRICING_PLANS.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Basic", "Pro", "Enterprise"]);
    }

    #[test]
    fn test_only_pro_is_most_popular() {
        let popular: Vec<_> = PRICING_PLANS.iter().filter(|p| p.most_popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Pro");
    }

    #[test]
    fn test_plans_are_priced_in_ascending_order() {
        assert!(
            PRICING_PLANS
                .windows(2)
                .all(|pair| pair[0].price < pair[1].price)
        );
        assert!(PRICING_PLANS.iter().all(|p| !p.features.is_empty()));
    }

    #[test]
    fn test_price_and_period_labels() {
        assert_eq!(PRICING_PLANS[1].price_label(), "$79");
        assert!(PRICING_PLANS.iter().all(|p| p.period == "month"));
        assert_eq!(PRICING_PLANS[0].period_label(), "/month");
    }

    #[test]
    fn test_plan_features_match_published_tiers() {
        assert_eq!(PRICING_PLANS[0].features[0], "50 AI thumbnails per month");
        assert_eq!(PRICING_PLANS[1].features[0], "500 AI thumbnails per month");
        assert_eq!(PRICING_PLANS[1].features.len(), 6);
        assert_eq!(PRICING_PLANS[2].features[0], "Every feature of Pro +");
    }

    #[test]
    fn test_nav_links() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Features", "Stats", "Pricing"]);
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["/", "/#features", "/#stats", "/#pricing"]);
        assert!(!NAV_LINKS[0].is_anchor());
        assert!(NAV_LINKS[1..].iter().all(|l| l.is_anchor()));
    }

    #[test]
    fn test_features_are_populated() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec!["Smart Generation", "Eye-catching Thumbnails", "Fully Customizable"]
        );
        assert!(
            FEATURES
                .iter()
                .all(|f| !f.icon.is_empty() && !f.description.is_empty())
        );
    }

    #[test]
    fn test_stats() {
        let figures: Vec<_> = STATS.iter().map(|s| (s.value, s.suffix, s.label)).collect();
        assert_eq!(
            figures,
            vec![
                (152_847, "+", "Thumbnails Generated"),
                (8_432, "+", "Users Onboarded"),
            ]
        );
    }

    #[test]
    fn test_legal_docs() {
        assert_eq!(LegalDoc::Terms.title(), "Terms of Service");
        assert_eq!(LegalDoc::Privacy.title(), "Privacy Policy");
        assert!(LegalDoc::Terms.body().contains("Acceptance of Terms"));
        assert!(LegalDoc::Privacy.body().contains("Information We Collect"));
    }

    #[test]
    fn test_legal_docs_have_every_section() {
        let terms = LegalDoc::Terms.body();
        let privacy = LegalDoc::Privacy.body();
        assert_eq!(terms.matches("\n## ").count(), 9);
        assert_eq!(privacy.matches("\n## ").count(), 10);
        assert!(terms.contains("support@thumbly.com"));
        assert!(privacy.contains("privacy@thumbly.com"));
    }
}
