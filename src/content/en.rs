use super::*;

pub(super) static CONTENT: LocaleContent = LocaleContent {
    skip_link: "Skip to main content",
    back_to_home: "Back to Home",
    whatsapp_label: "Chat on WhatsApp",
    language_label: "Choose language",
    banner: BannerContent {
        text: "40+ therapists have already joined our pilot.",
        request_access: "Request Early Access",
        aria_request_access: "Request early access to TheraNote",
        book_call: "Book a Call",
        aria_book_call: "Schedule a consultation call",
    },
    hero: HeroContent {
        title: "Built by IDF fighters",
        subtitle: "for the ones who carry the unseen wars.",
        description: &[
            Span::Text("A social-tech initiative born from the pain of combat soldiers, created for the mental health of us all. "),
            Span::Brand,
            Span::Text(" transforms how therapists listen, document, and understand."),
        ],
        request_access: "Request Early Access",
        aria_request_access: "Request early access to TheraNote platform",
        book_call: "Book a Call",
        aria_book_call: "Schedule a consultation call with TheraNote team",
        image_alt: "TheraNote system interface showing dashboard with session analytics, client progress tracking, and therapeutic insights visualization",
        scroll_label: "Scroll to next section",
    },
    story: StoryContent {
        title: "A mission that began in battle and continues in therapy",
        p1: &[
            Span::Brand,
            Span::Text(" was founded by former Israeli combat soldiers, driven by deep personal pain and a renewed sense of purpose."),
        ],
        p2: "After completing our military service, we entered a new arena: mental health. There, we saw therapists doing sacred work — but alone. No real tools. No clarity. No way to truly document or understand what unfolds in a session.",
        p3: "So we built one.",
    },
    product: ProductContent {
        title: "An AI system that listens, understands, and supports",
        subtitle: "so you can focus on healing",
        features: &[
            Feature {
                icon: FeatureIcon::Bot,
                title: "AI-Powered Insight",
                description: &[Span::Text("Go beyond words. Our AI analyzes voice tone and visual cues to identify key emotional moments, potential triggers, and recurring themes that might otherwise be missed. Surface the unseen data of therapy.")],
                image_url: img!("b03e1e838_image.png"),
                alt: "TheraNote dashboard displaying emotional analysis charts, session insights timeline, and AI-generated therapeutic recommendations based on voice tone and visual cues analysis.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::TrendingUp,
                title: "Data-Driven Progress Tracking",
                description: &[
                    Span::Text("Understand a client's journey at a glance. "),
                    Span::Brand,
                    Span::Text(" visualizes therapeutic progress, tracks key metrics, and provides a clear, data-driven context for every session, helping you build more effective treatment plans."),
                ],
                image_url: img!("f42368d31_image.png"),
                alt: "TheraNote interface showing client progress visualization with therapy session graphs, milestone tracking, treatment outcome metrics, and comprehensive session summaries over time.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::Calendar,
                title: "Streamlined Session Management",
                description: &[
                    Span::Text("From scheduling to follow-ups, your entire workflow is organized in one intuitive place. "),
                    Span::Brand,
                    Span::Text(" handles the administrative load so you can focus on what matters most: your client."),
                ],
                image_url: img!("a98c392b8_image.png"),
                alt: "TheraNote calendar interface displaying organized weekly therapy sessions, appointment scheduling system, client management tools, and automated follow-up reminders.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::Sparkles,
                title: "Dedicated AI Agent",
                description: &[
                    Span::Text("A specialized "),
                    Span::Brand,
                    Span::Text(" agent that understands your language as a therapist. Extract insights, generate summaries, brainstorm ideas, consult on cases without hours of unnecessary work."),
                ],
                image_url: img!("ee525f57a_image.png"),
                alt: "Preview of TheraNote AI agent interface for therapeutic consultation and case analysis - coming soon feature",
                coming_soon: Some("Coming Soon"),
            },
        ],
    },
    why_now: WhyNowContent {
        title: "Mental health in Israel is in crisis and therapy needs support",
        points: &[
            Stat {
                value: StatValue::Number { value: 300, suffix: "%+" },
                label: "increase in therapy requests",
            },
            Stat {
                value: StatValue::Text("Overworked"),
                label: "therapists are under-supported",
            },
            Stat {
                value: StatValue::Text("In The Dark"),
                label: "sessions often happen with no records",
            },
        ],
        conclusion: &[
            Span::Brand,
            Span::Text(" is here to open eyes, save time, and give the therapist back the clarity and power to understand."),
        ],
    },
    cta: CtaContent {
        title: "Ready to be part of something bigger?",
        description: "If you're a therapist, clinic, or organization in the field of mental health you're invited to join this journey. Gain early access. Speak with our team. Help shape the future of therapeutic care.",
        book_call: "Book a Call with Our Team",
        join_waitlist: "Join the Waitlist",
    },
    team: TeamContent {
        title: "Our Founding Team",
        accelerator: "Captains at 18XELITE IMPACT Accelerator | Ministry of Defense & Israel Innovation Authority",
        members: &[
            TeamMember {
                name: "Ido Elmaliach",
                badge: "CEO",
                role: "Co-founder, former IDF commander, visionary technologist, and strategy",
                image_url: img!("79c999bcb_WhatsApp2025-08-04163918_1acb6095.jpg"),
                quote: "My mission didn't end after service. It transformed.",
                degree: "B.A. in Business Administration & Information Systems",
                image_position: "center 30%",
            },
            TeamMember {
                name: "Shahar Afuta",
                badge: "CMO",
                role: "Founder, researcher, community builder, marketing lead, and growth",
                image_url: img!("96c261c63_WhatsApp2025-08-04163916_96a3b709.jpg"),
                quote: "I bridge between human experience and real insight.",
                degree: "B.A. in Business Administration & Information Systems",
                image_position: "center 20%",
            },
        ],
    },
    advisors: AdvisorsContent {
        title: "Building Together with Israel's Leading Minds",
        description: "We are honored to have distinguished advisors including some of the most prominent names in Israeli psychology and mental health who believe in this mission and are helping us shape the future of therapeutic care.",
        kinds: &[
            AdvisorKind {
                icon: AdvisorIcon::Users,
                title: "Leading Clinical Psychologists",
                description: "Renowned therapists and trauma specialists guiding our therapeutic approach and ethical framework.",
            },
            AdvisorKind {
                icon: AdvisorIcon::Heart,
                title: "Mental Health Advocates",
                description: "Pioneering voices in Israeli mental health care helping shape our mission and values.",
            },
            AdvisorKind {
                icon: AdvisorIcon::Lightbulb,
                title: "Health-Tech Visionaries",
                description: "Top business strategists and entrepreneurs advising on sustainable growth and innovation.",
            },
        ],
    },
    faq: FaqContent {
        title: "Want to know more?",
        items: &[
            FaqItem {
                question: "How does it work during a session?",
                answer: "We provide a smart assistant that runs silently alongside you. It listens, transcribes, and analyzes in real-time without interrupting your therapeutic flow.",
            },
            FaqItem {
                question: "Can it support anonymous use?",
                answer: "Yes — no identifying data is required. You maintain full control over what information is processed and stored. Client privacy is our top priority.",
            },
            FaqItem {
                question: "What about data security?",
                answer: "We are HIPAA-compliant and meet Israeli privacy standards. All data is encrypted, processed securely, and stored according to the highest industry standards.",
            },
            FaqItem {
                question: "Does the client need an app?",
                answer: "No. This is built for therapists first. The client never sees the system unless you choose to share insights with them. It's completely invisible to your clients.",
            },
        ],
    },
    footer: FooterContent {
        tagline: "Technology in the service of healing. Building the future of mental health care in Israel and beyond.",
        get_in_touch: "Get in Touch",
        resources: "Resources",
        copyright: &[
            Span::Text("© 2024 "),
            Span::Brand,
            Span::Text(". All rights reserved. Building with purpose, healing with technology."),
        ],
        availability: "Available globally, rooted in Israel",
        contact: &[
            ContactLine { kind: ContactKind::Email, name: "General Inquiries", value: "THERANOTE1@GMAIL.COM" },
            ContactLine { kind: ContactKind::Phone, name: "Partnership", value: "054-5360353" },
            ContactLine { kind: ContactKind::Phone, name: "Support", value: "050-7722240" },
            ContactLine { kind: ContactKind::Location, name: "Visit Us", value: "Tel Aviv, Israel" },
        ],
        links: &[
            FooterLink { name: "Privacy Policy", target: LinkTarget::PrivacyPolicy },
            FooterLink { name: "Terms & Conditions", target: LinkTarget::TermsOfService },
            FooterLink { name: "Contact Us", target: LinkTarget::Placeholder },
            FooterLink { name: "Partner with Us", target: LinkTarget::Placeholder },
            FooterLink { name: "Research & Publications", target: LinkTarget::Placeholder },
        ],
        accessibility_statement: "Accessibility Statement",
    },
    privacy_policy: LegalPage {
        title: "Privacy Policy",
        sections: &[
            LegalSection {
                heading: "Introduction",
                paragraphs: &[
                    "Welcome to TheraNote! We are committed to protecting your privacy and handling your data in an open and transparent manner. This Privacy Policy outlines how we collect, use, disclose, and protect your information when you use our services.",
                    "By using TheraNote, you agree to the collection and use of information in accordance with this policy. We use your data to provide and improve the service.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Information We Collect",
                paragraphs: &[
                    "We collect several types of information for various purposes to provide and improve our service to you.",
                    "Types of Data Collected:",
                ],
                list: &[
                    "Personal Data: While using our Service, we may ask you to provide us with certain personally identifiable information that can be used to contact or identify you ('Personal Data'). This may include, but is not limited to: First name and last name, Email address, Phone number, Organization/Clinic name, Type of inquiry (e.g., early access, consultation, partnership), Preferred contact method, and any other information you provide in your message.",
                    "Usage Data: We may also collect information how the Service is accessed and used ('Usage Data'). This Usage Data may include information such as your computer's Internet Protocol address (e.g. IP address), browser type, browser version, the pages of our Service that you visit, the time and date of your visit, the time spent on those pages, unique device identifiers and other diagnostic data.",
                    "Therapeutic Data (if applicable and consented): For services involving AI analysis of sessions, we process audio/visual data strictly for the purpose of providing therapeutic insights. This data is de-identified and encrypted, and we do not store identifying client information. Explicit consent is obtained prior to processing any therapeutic session data.",
                ],
            },
            LegalSection {
                heading: "Use of Data",
                paragraphs: &["TheraNote uses the collected data for various purposes:"],
                list: &[
                    "To provide and maintain our Service",
                    "To notify you about changes to our Service",
                    "To allow you to participate in interactive features of our Service when you choose to do so",
                    "To provide customer support",
                    "To gather analysis or valuable information so that we can improve our Service",
                    "To monitor the usage of our Service",
                    "To detect, prevent and address technical issues",
                    "To provide you with news, special offers and general information about other goods, services and events which we offer that are similar to those that you have already purchased or enquired about unless you have opted not to receive such information.",
                ],
            },
            LegalSection {
                heading: "Disclosure of Data",
                paragraphs: &["We may disclose your Personal Data in the good faith belief that such action is necessary to:"],
                list: &[
                    "To comply with a legal obligation",
                    "To protect and defend the rights or property of TheraNote",
                    "To prevent or investigate possible wrongdoing in connection with the Service",
                    "To protect the personal safety of users of the Service or the public",
                    "To protect against legal liability",
                ],
            },
            LegalSection {
                heading: "Security of Data",
                paragraphs: &[
                    "The security of your data is important to us, but remember that no method of transmission over the Internet, or method of electronic storage is 100% secure. While we strive to use commercially acceptable means to protect your Personal Data, we cannot guarantee its absolute security.",
                    "We are HIPAA-compliant and meet Israeli privacy standards. All data is encrypted, processed securely, and stored according to the highest industry standards.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Your Rights (GDPR/Israeli Privacy Law)",
                paragraphs: &["Depending on your location, you may have certain data protection rights, including:"],
                list: &[
                    "The right to access, update or to delete the information we have on you.",
                    "The right of rectification.",
                    "The right to object.",
                    "The right to restriction.",
                    "The right to data portability.",
                    "The right to withdraw consent.",
                ],
            },
            LegalSection {
                heading: "Changes to This Privacy Policy",
                paragraphs: &[
                    "We may update our Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page.",
                    "We will let you know via email and/or a prominent notice on our Service, prior to the change becoming effective and update the 'effective date' at the top of this Privacy Policy.",
                    "You are advised to review this Privacy Policy periodically for any changes. Changes to this Privacy Policy are effective when they are posted on this page.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Contact Us",
                paragraphs: &[
                    "If you have any questions about this Privacy Policy, please contact us:",
                    "By email: THERANOTE1@GMAIL.COM",
                ],
                list: &[],
            },
        ],
    },
    terms_of_service: LegalPage {
        title: "Terms of Service",
        sections: &[
            LegalSection {
                heading: "Welcome to TheraNote!",
                paragraphs: &["These Terms of Service ('Terms') govern your access to and use of TheraNote's website, products, and services (collectively, the 'Service'). By accessing or using the Service, you agree to be bound by these Terms and our Privacy Policy. If you do not agree to these Terms, please do not use our Service."],
                list: &[],
            },
            LegalSection {
                heading: "Use of Service",
                paragraphs: &[
                    "TheraNote provides an AI-powered system designed to assist mental health professionals in listening, documenting, and understanding therapeutic sessions. The Service is intended for professional use only and is not a substitute for professional medical advice, diagnosis, or treatment.",
                    "You agree to use the Service only for lawful purposes and in a way that does not infringe the rights of, restrict or inhibit anyone else's use and enjoyment of the Service.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "User Accounts",
                paragraphs: &[
                    "To access certain features of the Service, you may be required to create an account. You agree to provide accurate, current, and complete information during the registration process and to update such information to keep it accurate, current, and complete. You are responsible for safeguarding your password and for any activities or actions under your account.",
                    "You must notify TheraNote immediately of any unauthorized use of your account or any other breach of security.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Data Privacy and Security",
                paragraphs: &[
                    "Your privacy is critically important to us. Our Privacy Policy explains how we collect, use, and protect your personal information and any therapeutic data processed through our Service. By using the Service, you consent to such processing and you warrant that all data provided by you is accurate.",
                    "We implement robust security measures, including encryption and de-identification where applicable, to protect your data. However, no method of transmission over the Internet, or method of electronic storage, is 100% secure.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Intellectual Property",
                paragraphs: &[
                    "The Service and its original content, features, and functionality are and will remain the exclusive property of TheraNote and its licensors. The Service is protected by copyright, trademark, and other laws of both Israel and foreign countries.",
                    "Our trademarks and trade dress may not be used in connection with any product or service without the prior written consent of TheraNote.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Therapeutic Data Handling",
                paragraphs: &[
                    "For features involving AI analysis of therapeutic sessions, you understand and agree that TheraNote processes audio/visual data to provide insights. This processing is strictly for the purpose of assisting therapists and improving the Service.",
                    "You are solely responsible for obtaining all necessary consents from your clients for the recording and processing of their therapeutic session data through TheraNote, in compliance with all applicable laws and ethical guidelines (e.g., HIPAA, Israeli privacy laws).",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Limitation of Liability",
                paragraphs: &["In no event shall TheraNote, nor its directors, employees, partners, agents, suppliers, or affiliates, be liable for indirect, incidental, special, consequential or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses, resulting from (i) your access to or use of or inability to access or use the Service; (ii) conduct or content of third party on the Service; (iii) content obtained from the Service; and (iv) unauthorized access, use or alteration of your transmissions or content, whether based on warranty, contract, tort (including negligence) or other legal theory, whether or not we have been informed of the possibility of such damage, and even if a remedy set forth herein is found to have failed of its essential purpose."],
                list: &[],
            },
            LegalSection {
                heading: "Governing Law",
                paragraphs: &[
                    "These Terms shall be governed and construed in accordance with the laws of Israel, without regard to its conflict of law provisions.",
                    "Our failure to enforce any right or provision of these Terms will not be considered a waiver of those rights. If any provision of these Terms is held to be invalid or unenforceable by a court, the remaining provisions of these Terms will remain in effect.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Changes to Terms",
                paragraphs: &[
                    "We reserve the right, at our sole discretion, to modify or replace these Terms at any time. If a revision is material, we will provide at least 30 days' notice prior to any new terms taking effect. What constitutes a material change will be determined at our sole discretion.",
                    "By continuing to access or use our Service after any revisions become effective, you agree to be bound by the revised terms. If you do not agree to the new terms, you are no longer authorized to use the Service.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "Contact Us",
                paragraphs: &[
                    "If you have any questions about these Terms, please contact us:",
                    "By email: THERANOTE1@GMAIL.COM",
                ],
                list: &[],
            },
        ],
    },
    accessibility_statement: AccessibilityStatement {
        title: "Accessibility Statement",
        intro: &[
            Span::Text("Our commitment at "),
            Span::Brand,
            Span::Text(" to delivering an accessible solution for every therapist guides us to keep equal access to all content on this website. We work seriously to make the site accessible to all users, including people with disabilities, and hold ourselves to the highest standards of digital accessibility."),
        ],
        commitment_heading: "Our Commitment to Accessibility",
        commitment: "We make every effort to ensure the website is accessible to people with disabilities (including people with visual impairments), with a firm commitment to meet the international standards for accessible web content. We run periodic checks to confirm the site is suitable for the general public.",
        standards_heading: "Standards and Guidelines We Follow",
        standards: &[
            "Israeli Standard SI 5568 - Accessibility of web content",
            "WCAG 2.1 guidelines at level AA (Web Content Accessibility Guidelines)",
            "Equal Rights for Persons with Disabilities regulations (service accessibility adjustments)",
        ],
        features_heading: "Accessibility Features on This Site",
        features: &[
            "Support for screen readers and assistive technologies",
            "Keyboard-only navigation",
            "Appropriate alt text for every image",
            "Annotations and headings in a clear hierarchy",
            "Suitable, clear color contrast",
            "Hebrew and English language support",
            "Responsive design adapted to different devices",
            "Clear links with meaningful descriptions",
            "Accessible forms with clear labels",
            "Response times suitable for all users",
        ],
        ongoing_heading: "Our Ongoing Efforts",
        ongoing: "We keep improving and updating the accessibility of the site on a regular basis. Our team receives regular training in digital accessibility, and we run periodic reviews with accessibility experts to make sure the site meets the required standards. If you run into an accessibility problem or have suggestions for improvement, please contact us.",
        contact_heading: "How to Contact Us About Accessibility",
        contact_intro: "If you have any difficulty accessing content on the site, or have comments and suggestions for improving its accessibility, we would be glad to hear from you:",
        coordinator: "Shahar Afuta - Accessibility Coordinator",
        email_label: "Email",
        response_label: "Response Time",
        response_time: "We commit to getting back to you within 5 business days",
        last_updated: "This accessibility statement was last updated on:",
    },
    contact_form: ContactFormContent {
        title: "Get in Touch",
        close: "Close",
        name_label: "Full Name *",
        email_label: "Email *",
        phone_label: "Phone",
        org_label: "Organization/Clinic",
        inquiry_type_label: "Type of Inquiry",
        inquiry_types: InquiryTypeLabels {
            early_access: "Early Access Request",
            consultation: "Consultation Call",
            partnership: "Partnership",
            general: "General Inquiry",
        },
        preferred_contact_label: "How would you prefer us to contact you?",
        contact_methods: ContactMethodLabels {
            email: "Email",
            phone: "Phone",
        },
        reason_label: "Tell us about your needs *",
        reason_placeholder: "Please tell us briefly about your needs for our system...",
        submit_button: "Send Message",
        submitting_button: "Sending...",
        already_submitting: "Your request is still being sent. Please wait a moment.",
        cancel_button: "Cancel",
        privacy_consent: PrivacyConsentText {
            title: "Privacy and Contact Consent",
            text: "I agree to TheraNote's privacy policy and consent to being contacted by the TheraNote team for follow-up regarding my inquiry. I understand that my personal information will be used solely for this purpose and will be handled securely.",
            privacy_policy_link: "Privacy Policy",
        },
        privacy_consent_required: "Please agree to our privacy policy and contact consent to continue.",
        missing_field: "Please fill in the required field:",
        invalid_email: "Please enter a valid email address.",
        submit_error: "An error occurred while submitting your request. Please try again or contact us directly.",
        submit_error_network: "An error occurred while submitting your request. Please check your internet connection and try again.",
        unknown_error: "An unknown error occurred.",
        success_title: "Thank you!",
        success_message: "We received your message and will get back to you soon.",
    },
    accessibility_menu: AccessibilityMenuContent {
        title: "Accessibility Menu",
        trigger_label: "Open Accessibility Menu",
        close_label: "Close Accessibility Menu",
        reset: "Reset Settings",
        statement: "Accessibility Statement",
        contrast: "High Contrast",
        monochrome: "Monochrome",
        invert: "Invert Colors",
        highlight_headings: "Highlight Headings",
        highlight_links: "Highlight Links",
        readable_font: "Readable Font",
        increase_text: "Increase Text",
        decrease_text: "Decrease Text",
    },
    cookie_banner: CookieBannerContent {
        title: "We use cookies",
        description: "We use cookies to enhance your browsing experience, serve personalized content, and analyze our traffic. By clicking 'Accept All', you consent to our use of cookies.",
        accept_all: "Accept All",
        accept_selected: "Accept Selected",
        reject_all: "Reject All",
        settings: "Cookie Settings",
        close: "Close",
        necessary: CategoryText {
            title: "Necessary Cookies",
            description: "These cookies are essential for the website to function properly and cannot be disabled.",
        },
        analytics: CategoryText {
            title: "Analytics Cookies",
            description: "These cookies help us understand how visitors interact with our website by collecting and reporting information anonymously.",
        },
        marketing: CategoryText {
            title: "Marketing Cookies",
            description: "These cookies are used to deliver relevant advertisements and track the effectiveness of advertising campaigns.",
        },
        functional: CategoryText {
            title: "Functional Cookies",
            description: "These cookies enable enhanced functionality and personalization, such as remembering your preferences.",
        },
        learn_more: "Learn more about cookies in our",
        privacy_policy: "Privacy Policy",
    },
};
