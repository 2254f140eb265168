//! All display text, one immutable tree per language.

macro_rules! img {
    ($file:literal) => {
        concat!(
            "https://qtrypzzcjebvfcihiynt.supabase.co/storage/v1/object/public/base44-prod/public/",
            $file
        )
    };
}

mod en;
mod he;

use crate::state::Language;

/// Piece of a sentence where the product name gets highlighted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span {
    Text(&'static str),
    Brand,
}

pub type Rich = &'static [Span];

pub const HERO_IMAGE: &str = img!("40c6cfc4b_image.png");
pub const LOGO_IMAGE: &str = img!("bf21c5382_LOGOTN.jpg");

/// Split plain text so every occurrence of the product name becomes a
/// [`Span::Brand`].
pub fn brand_spans(text: &'static str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;
    while let Some(at) = rest.find(crate::config::BRAND) {
        if at > 0 {
            spans.push(Span::Text(&rest[..at]));
        }
        spans.push(Span::Brand);
        rest = &rest[at + crate::config::BRAND.len()..];
    }
    if !rest.is_empty() {
        spans.push(Span::Text(rest));
    }
    spans
}

pub fn for_language(language: Language) -> &'static LocaleContent {
    match language {
        Language::En => &en::CONTENT,
        Language::He => &he::CONTENT,
    }
}

#[derive(Debug, PartialEq)]
pub struct LocaleContent {
    pub skip_link: &'static str,
    pub back_to_home: &'static str,
    pub whatsapp_label: &'static str,
    pub language_label: &'static str,
    pub banner: BannerContent,
    pub hero: HeroContent,
    pub story: StoryContent,
    pub product: ProductContent,
    pub why_now: WhyNowContent,
    pub cta: CtaContent,
    pub team: TeamContent,
    pub advisors: AdvisorsContent,
    pub faq: FaqContent,
    pub footer: FooterContent,
    pub privacy_policy: LegalPage,
    pub terms_of_service: LegalPage,
    pub accessibility_statement: AccessibilityStatement,
    pub contact_form: ContactFormContent,
    pub accessibility_menu: AccessibilityMenuContent,
    pub cookie_banner: CookieBannerContent,
}

#[derive(Debug, PartialEq)]
pub struct BannerContent {
    pub text: &'static str,
    pub request_access: &'static str,
    pub aria_request_access: &'static str,
    pub book_call: &'static str,
    pub aria_book_call: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct HeroContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: Rich,
    pub request_access: &'static str,
    pub aria_request_access: &'static str,
    pub book_call: &'static str,
    pub aria_book_call: &'static str,
    pub image_alt: &'static str,
    pub scroll_label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct StoryContent {
    pub title: &'static str,
    pub p1: Rich,
    pub p2: &'static str,
    pub p3: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Bot,
    TrendingUp,
    Calendar,
    Sparkles,
}

impl FeatureIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Bot => "🤖",
            FeatureIcon::TrendingUp => "📈",
            FeatureIcon::Calendar => "📅",
            FeatureIcon::Sparkles => "✨",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: Rich,
    pub image_url: &'static str,
    pub alt: &'static str,
    pub coming_soon: Option<&'static str>,
}

#[derive(Debug, PartialEq)]
pub struct ProductContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [Feature],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatValue {
    /// Counts up to `value` when scrolled into view.
    Number { value: u32, suffix: &'static str },
    /// Revealed letter by letter.
    Text(&'static str),
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: StatValue,
    pub label: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct WhyNowContent {
    pub title: &'static str,
    pub points: &'static [Stat],
    pub conclusion: Rich,
}

#[derive(Debug, PartialEq)]
pub struct CtaContent {
    pub title: &'static str,
    pub description: &'static str,
    pub book_call: &'static str,
    pub join_waitlist: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub badge: &'static str,
    pub role: &'static str,
    pub image_url: &'static str,
    pub quote: &'static str,
    pub degree: &'static str,
    pub image_position: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct TeamContent {
    pub title: &'static str,
    pub accelerator: &'static str,
    pub members: &'static [TeamMember],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvisorIcon {
    Users,
    Heart,
    Lightbulb,
}

impl AdvisorIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            AdvisorIcon::Users => "👥",
            AdvisorIcon::Heart => "❤️",
            AdvisorIcon::Lightbulb => "💡",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct AdvisorKind {
    pub icon: AdvisorIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct AdvisorsContent {
    pub title: &'static str,
    pub description: &'static str,
    pub kinds: &'static [AdvisorKind],
}

#[derive(Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct FaqContent {
    pub title: &'static str,
    pub items: &'static [FaqItem],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

impl ContactKind {
    pub fn glyph(self) -> &'static str {
        match self {
            ContactKind::Email => "✉️",
            ContactKind::Phone => "📞",
            ContactKind::Location => "📍",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct ContactLine {
    pub kind: ContactKind,
    pub name: &'static str,
    pub value: &'static str,
}

/// Where a footer resource link goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    PrivacyPolicy,
    TermsOfService,
    Placeholder,
}

#[derive(Debug, PartialEq)]
pub struct FooterLink {
    pub name: &'static str,
    pub target: LinkTarget,
}

#[derive(Debug, PartialEq)]
pub struct FooterContent {
    pub tagline: &'static str,
    pub get_in_touch: &'static str,
    pub resources: &'static str,
    pub copyright: Rich,
    pub availability: &'static str,
    pub contact: &'static [ContactLine],
    pub links: &'static [FooterLink],
    pub accessibility_statement: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub list: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct LegalPage {
    pub title: &'static str,
    pub sections: &'static [LegalSection],
}

#[derive(Debug, PartialEq)]
pub struct AccessibilityStatement {
    pub title: &'static str,
    pub intro: Rich,
    pub commitment_heading: &'static str,
    pub commitment: &'static str,
    pub standards_heading: &'static str,
    pub standards: &'static [&'static str],
    pub features_heading: &'static str,
    pub features: &'static [&'static str],
    pub ongoing_heading: &'static str,
    pub ongoing: &'static str,
    pub contact_heading: &'static str,
    pub contact_intro: &'static str,
    pub coordinator: &'static str,
    pub email_label: &'static str,
    pub response_label: &'static str,
    pub response_time: &'static str,
    pub last_updated: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct InquiryTypeLabels {
    pub early_access: &'static str,
    pub consultation: &'static str,
    pub partnership: &'static str,
    pub general: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactMethodLabels {
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PrivacyConsentText {
    pub title: &'static str,
    pub text: &'static str,
    pub privacy_policy_link: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct ContactFormContent {
    pub title: &'static str,
    pub close: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub phone_label: &'static str,
    pub org_label: &'static str,
    pub inquiry_type_label: &'static str,
    pub inquiry_types: InquiryTypeLabels,
    pub preferred_contact_label: &'static str,
    pub contact_methods: ContactMethodLabels,
    pub reason_label: &'static str,
    pub reason_placeholder: &'static str,
    pub submit_button: &'static str,
    pub submitting_button: &'static str,
    pub already_submitting: &'static str,
    pub cancel_button: &'static str,
    pub privacy_consent: PrivacyConsentText,
    pub privacy_consent_required: &'static str,
    pub missing_field: &'static str,
    pub invalid_email: &'static str,
    pub submit_error: &'static str,
    pub submit_error_network: &'static str,
    pub unknown_error: &'static str,
    pub success_title: &'static str,
    pub success_message: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct AccessibilityMenuContent {
    pub title: &'static str,
    pub trigger_label: &'static str,
    pub close_label: &'static str,
    pub reset: &'static str,
    pub statement: &'static str,
    pub contrast: &'static str,
    pub monochrome: &'static str,
    pub invert: &'static str,
    pub highlight_headings: &'static str,
    pub highlight_links: &'static str,
    pub readable_font: &'static str,
    pub increase_text: &'static str,
    pub decrease_text: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CategoryText {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CookieBannerContent {
    pub title: &'static str,
    pub description: &'static str,
    pub accept_all: &'static str,
    pub accept_selected: &'static str,
    pub reject_all: &'static str,
    pub settings: &'static str,
    pub close: &'static str,
    pub necessary: CategoryText,
    pub analytics: CategoryText,
    pub marketing: CategoryText,
    pub functional: CategoryText,
    pub learn_more: &'static str,
    pub privacy_policy: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> (&'static LocaleContent, &'static LocaleContent) {
        (for_language(Language::En), for_language(Language::He))
    }

    #[test]
    fn brand_spans_marks_each_mention() {
        assert_eq!(
            brand_spans("Welcome to TheraNote! TheraNote helps."),
            vec![
                Span::Text("Welcome to "),
                Span::Brand,
                Span::Text("! "),
                Span::Brand,
                Span::Text(" helps."),
            ]
        );
        assert_eq!(brand_spans("TheraNote"), vec![Span::Brand]);
        assert_eq!(brand_spans("no mention"), vec![Span::Text("no mention")]);
        assert!(brand_spans("").is_empty());
    }

    fn has_brand(rich: Rich) -> bool {
        rich.iter().any(|s| *s == Span::Brand)
    }

    #[test]
    fn locales_are_distinct() {
        let (en, he) = both();
        assert_ne!(en.hero.title, he.hero.title);
        assert_ne!(en.faq.title, he.faq.title);
        assert_ne!(en.contact_form.privacy_consent_required, he.contact_form.privacy_consent_required);
    }

    #[test]
    fn locales_have_matching_shapes() {
        let (en, he) = both();
        assert_eq!(en.product.features.len(), he.product.features.len());
        assert_eq!(en.why_now.points.len(), he.why_now.points.len());
        assert_eq!(en.team.members.len(), he.team.members.len());
        assert_eq!(en.advisors.kinds.len(), he.advisors.kinds.len());
        assert_eq!(en.faq.items.len(), he.faq.items.len());
        assert_eq!(en.footer.contact.len(), he.footer.contact.len());
        assert_eq!(en.footer.links.len(), he.footer.links.len());
        assert_eq!(en.privacy_policy.sections.len(), he.privacy_policy.sections.len());
        assert_eq!(en.terms_of_service.sections.len(), he.terms_of_service.sections.len());
        assert_eq!(
            en.accessibility_statement.features.len(),
            he.accessibility_statement.features.len()
        );
        for (a, b) in en.product.features.iter().zip(he.product.features) {
            assert_eq!(a.icon, b.icon);
            assert_eq!(a.image_url, b.image_url);
            assert_eq!(a.coming_soon.is_some(), b.coming_soon.is_some());
        }
        for (a, b) in en.footer.links.iter().zip(he.footer.links) {
            assert_eq!(a.target, b.target);
        }
        for (a, b) in en.why_now.points.iter().zip(he.why_now.points) {
            assert_eq!(
                matches!(a.value, StatValue::Number { .. }),
                matches!(b.value, StatValue::Number { .. })
            );
        }
    }

    #[test]
    fn brand_is_emphasised_in_both_locales() {
        for lang in Language::ALL {
            let c = for_language(lang);
            assert!(has_brand(c.hero.description), "{lang}");
            assert!(has_brand(c.story.p1), "{lang}");
            assert!(has_brand(c.why_now.conclusion), "{lang}");
            assert!(has_brand(c.footer.copyright), "{lang}");
            assert!(has_brand(c.accessibility_statement.intro), "{lang}");
        }
    }

    #[test]
    fn footer_routes_to_both_legal_pages() {
        for lang in Language::ALL {
            let links = for_language(lang).footer.links;
            assert!(links.iter().any(|l| l.target == LinkTarget::PrivacyPolicy));
            assert!(links.iter().any(|l| l.target == LinkTarget::TermsOfService));
        }
    }

    #[test]
    fn legal_sections_are_not_empty() {
        for lang in Language::ALL {
            let c = for_language(lang);
            for page in [&c.privacy_policy, &c.terms_of_service] {
                assert!(!page.sections.is_empty());
                assert!(page.sections.iter().all(|s| !s.paragraphs.is_empty()));
            }
        }
    }
}
