use super::*;

pub(super) static CONTENT: LocaleContent = LocaleContent {
    skip_link: "דלג לתוכן המרכזי",
    back_to_home: "חזרה לדף הבית",
    whatsapp_label: "שיחה בוואטסאפ",
    language_label: "בחירת שפה",
    banner: BannerContent {
        text: "מעל 40 מטפלים כבר הצטרפו לפיילוט שלנו.",
        request_access: "בקשה לגישה מוקדמת",
        aria_request_access: "בקשה לגישה מוקדמת לפלטפורמת TheraNote",
        book_call: "קבע שיחה",
        aria_book_call: "קבע שיחת ייעוץ עם צוות TheraNote",
    },
    hero: HeroContent {
        title: "נבנה על ידי לוחמי צה״ל",
        subtitle: "עבור אלו שנושאים את המלחמות השקופות.",
        description: &[
            Span::Text("מיזם חברתי-טכנולוגי שנולד מתוך הכאב של לוחמים, ונוצר למען הבריאות הנפשית של כולנו. "),
            Span::Brand,
            Span::Text(" משנה את הדרך שבה מטפלים מקשיבים, מתעדים ומבינים."),
        ],
        request_access: "בקשה לגישה מוקדמת",
        aria_request_access: "בקשה לגישה מוקדמת לפלטפורמת TheraNote",
        book_call: "קבע שיחה",
        aria_book_call: "קבע שיחת ייעוץ עם צוות TheraNote",
        image_alt: "ממשק מערכת TheraNote המציג לוח מחוונים עם ניתוח סשנים, מעקב אחר התקדמות מטופלים והדמיית תובנות טיפוליות",
        scroll_label: "גלילה לחלק הבא",
    },
    story: StoryContent {
        title: "משימה שהחלה בקרב וממשיכה בחדר הטיפולים",
        p1: &[
            Span::Brand,
            Span::Text(" נוסדה על ידי לוחמי צה״ל לשעבר, מתוך כאב אישי עמוק ותחושת שליחות מחודשת."),
        ],
        p2: "לאחר שחרורנו, נכנסנו לזירה חדשה: בריאות הנפש. שם, ראינו מטפלים עושים עבודת קודש — אבל לבד. בלי כלים אמיתיים. בלי בהירות. בלי דרך לתעד או להבין באמת את מה שקורה בטיפול.",
        p3: "אז בנינו אחד.",
    },
    product: ProductContent {
        title: "מערכת AI שמקשיבה, מבינה ותומכת",
        subtitle: "כדי שתוכלו להתמקד בריפוי",
        features: &[
            Feature {
                icon: FeatureIcon::Bot,
                title: "תובנות מבוססות AI",
                description: &[Span::Text("לראות מעבר למילים. ה-AI שלנו מנתח טון דיבור ורמזים חזותיים כדי לזהות רגעים רגשיים, טריגרים פוטנציאליים ונושאים חוזרים שאחרת היו עלולים להתפספס. לחשוף את המידע הסמוי של הטיפול.")],
                image_url: img!("b03e1e838_image.png"),
                alt: "לוח מחוונים של TheraNote המציג תרשימי ניתוח רגשי, ציר זמן של תובנות מהסשן, והמלצות טיפוליות שנוצרו על ידי AI.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::TrendingUp,
                title: "מעקב התקדמות מבוסס נתונים",
                description: &[
                    Span::Text("להבין את מסע המטופל במבט חטוף. "),
                    Span::Brand,
                    Span::Text(" ממחישה התקדמות טיפולית, עוקבת אחר מדדי מפתח, ומספקת הקשר ברור ומבוסס נתונים לכל טיפול, ועוזרת לך לבנות תוכניות טיפול יעילות יותר."),
                ],
                image_url: img!("f42368d31_image.png"),
                alt: "ממשק TheraNote המציג המחשת התקדמות מטופל עם גרפים של סשנים טיפוליים, מעקב אבני דרך ומדדי תוצאות טיפול.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::Calendar,
                title: "ניהול סשנים יעיל",
                description: &[
                    Span::Text("מתיאום פגישות ועד למעקב, כל זרימת העבודה שלך מאורגנת במקום אחד אינטואיטיבי. "),
                    Span::Brand,
                    Span::Text(" מטפלת בעומס האדמיניסטרטיבי כדי שתוכל להתמקד במה שחשוב באמת: המטופל שלך."),
                ],
                image_url: img!("a98c392b8_image.png"),
                alt: "ממשק לוח שנה של TheraNote המציג סשנים טיפוליים שבועיים, מערכת תיאום פגישות וכלי ניהול מטופלים.",
                coming_soon: None,
            },
            Feature {
                icon: FeatureIcon::Sparkles,
                title: "סוכן AI ייעודי",
                description: &[
                    Span::Text("סוכן "),
                    Span::Brand,
                    Span::Text(" ייעודי שמבין את השפה שלך כמטפל/ת. הפק תובנות, צור סיכומים, חשוב על רעיונות, התייעץ על מקרים ללא שעות של עבודה מיותרת."),
                ],
                image_url: img!("ee525f57a_image.png"),
                alt: "תצוגה מקדימה של סוכן ה-AI של TheraNote לייעוץ וניתוח מקרים - פיצ'ר שיגיע בקרוב.",
                coming_soon: Some("בקרוב"),
            },
        ],
    },
    why_now: WhyNowContent {
        title: "הבריאות הנפשית בישראל במשבר והטיפול זקוק לתמיכה",
        points: &[
            Stat {
                value: StatValue::Number { value: 300, suffix: "%+" },
                label: "עלייה בבקשות לטיפול",
            },
            Stat {
                value: StatValue::Text("עומס יתר"),
                label: "מטפלים סובלים מתת-תמיכה",
            },
            Stat {
                value: StatValue::Text("באפלה"),
                label: "טיפולים מתקיימים ללא תיעוד",
            },
        ],
        conclusion: &[
            Span::Brand,
            Span::Text(" כאן כדי לפקוח עיניים, לחסוך זמן, ולהחזיר למטפלים את הבהירות והכוח להבין."),
        ],
    },
    cta: CtaContent {
        title: "מוכנים להיות חלק ממשהו גדול יותר?",
        description: "אם את/ה מטפל/ת, קליניקה או ארגון בתחום בריאות הנפש, אתם מוזמנים להצטרף למסע הזה. קבלו גישה מוקדמת. דברו עם הצוות שלנו. עזרו לעצב את עתיד הטיפול הנפשי.",
        book_call: "קבעו שיחה עם הצוות שלנו",
        join_waitlist: "הצטרפו לרשימת ההמתנה",
    },
    team: TeamContent {
        title: "הצוות המייסד שלנו",
        accelerator: "קפטנים באקסלרטור 18XELITE IMPACT Accelerator | משרד הביטחון ורשות החדשנות",
        members: &[
            TeamMember {
                name: "עידו אלמליח",
                badge: "CEO",
                role: "מייסד שותף, מפקד לשעבר בצה״ל, טכנולוג וִיזיוֹנֶר ואסטרטגיה",
                image_url: img!("79c999bcb_WhatsApp2025-08-04163918_1acb6095.jpg"),
                quote: "השליחות שלי לא הסתיימה עם השחרור. היא שינתה צורה.",
                degree: "B.A במנהל עסקים ומערכות מידע",
                image_position: "center 30%",
            },
            TeamMember {
                name: "שחר אפוטה",
                badge: "CMO",
                role: "מייסד, חוקר, בונה קהילות, מוביל שיווק וצמיחה",
                image_url: img!("96c261c63_WhatsApp2025-08-04163916_96a3b709.jpg"),
                quote: "אני מגשר בין החוויה האנושית לתובנה אמיתית.",
                degree: "B.A במנהל עסקים ומערכות מידע",
                image_position: "center 20%",
            },
        ],
    },
    advisors: AdvisorsContent {
        title: "בונים יחד עם המוחות המובילים בישראל",
        description: "אנו גאים שיועצינו כוללים כמה מהשמות הבולטים בפסיכולוגיה ובריאות הנפש בישראל, שמאמינים במשימה זו ועוזרים לנו לעצב את עתיד הטיפול הנפשי.",
        kinds: &[
            AdvisorKind {
                icon: AdvisorIcon::Users,
                title: "פסיכולוגים קליניים מובילים",
                description: "מטפלים ומומחי טראומה בעלי שם המנחים את הגישה הטיפולית והמסגרת האתית שלנו.",
            },
            AdvisorKind {
                icon: AdvisorIcon::Heart,
                title: "מובילי דעה בבריאות הנפש",
                description: "קולות חלוציים בתחום בריאות הנפש בישראל שעוזרים לעצב את המשימה והערכים שלנו.",
            },
            AdvisorKind {
                icon: AdvisorIcon::Lightbulb,
                title: "יזמי הלת'-טק וִיזיוֹנֶרִים",
                description: "אסטרטגים עסקיים ויזמים מובילים המייעצים בנושאי צמיחה בת-קיימא וחדשנות.",
            },
        ],
    },
    faq: FaqContent {
        title: "רוצים לדעת עוד?",
        items: &[
            FaqItem {
                question: "איך זה עובד במהלך סשן?",
                answer: "אנו מספקים עוזר חכם שפועל בשקט לצידך. הוא מאזין, מתמלל ומנתח בזמן אמת מבלי להפריע לזרימה הטיפולית שלך.",
            },
            FaqItem {
                question: "האם המערכת תומכת בשימוש אנונימי?",
                answer: "כן — אין צורך בנתונים מזהים. את/ה שומר/ת על שליטה מלאה על המידע שמעובד ומאוחסן. פרטיות המטופל היא בראש סדר העדיפויות שלנו.",
            },
            FaqItem {
                question: "מה לגבי אבטחת מידע?",
                answer: "אנו עומדים בתקן HIPAA ובתקני הפרטיות הישראליים. כל הנתונים מוצפנים, מעובדים בצורה מאובטחת ומאוחסנים על פי הסטנדרטים הגבוהים ביותר בתעשייה.",
            },
            FaqItem {
                question: "האם המטופל צריך אפליקציה?",
                answer: "לא. המערכת נבנתה עבור מטפלים. המטופל לעולם לא רואה את המערכת אלא אם תבחר/י לשתף איתו תובנות. היא בלתי נראית לחלוטין למטופלים שלך.",
            },
        ],
    },
    footer: FooterContent {
        tagline: "טכנולוגיה בשירות הריפוי. בונים את עתיד הטיפול הנפשי בישראל ובעולם.",
        get_in_touch: "צרו קשר",
        resources: "מקורות מידע",
        copyright: &[
            Span::Text("© 2024 "),
            Span::Brand,
            Span::Text(". כל הזכויות שמורות. בונים עם תכלית, מרפאים עם טכנולוגיה."),
        ],
        availability: "זמין גלובלית, עם שורשים בישראל",
        contact: &[
            ContactLine { kind: ContactKind::Email, name: "פניות כלליות", value: "THERANOTE1@GMAIL.COM" },
            ContactLine { kind: ContactKind::Phone, name: "שותפויות", value: "054-5360353" },
            ContactLine { kind: ContactKind::Phone, name: "תמיכה", value: "050-7722240" },
            ContactLine { kind: ContactKind::Location, name: "בקרו אותנו", value: "תל אביב, ישראל" },
        ],
        links: &[
            FooterLink { name: "מדיניות פרטיות", target: LinkTarget::PrivacyPolicy },
            FooterLink { name: "תנאים והגבלות", target: LinkTarget::TermsOfService },
            FooterLink { name: "צרו קשר", target: LinkTarget::Placeholder },
            FooterLink { name: "הצעת שותפות", target: LinkTarget::Placeholder },
            FooterLink { name: "מחקר ופרסומים", target: LinkTarget::Placeholder },
        ],
        accessibility_statement: "הצהרת נגישות",
    },
    privacy_policy: LegalPage {
        title: "מדיניות פרטיות",
        sections: &[
            LegalSection {
                heading: "מבוא",
                paragraphs: &[
                    "ברוכים הבאים ל-TheraNote! אנו מחויבים להגן על פרטיותכם ולטפל בנתונים שלכם באופן פתוח ושקוף. מדיניות פרטיות זו מתארת כיצד אנו אוספים, משתמשים, חושפים ומגנים על המידע שלכם בעת השימוש בשירותינו.",
                    "על ידי שימוש ב-TheraNote, אתם מסכימים לאיסוף ושימוש במידע בהתאם למדיניות זו. אנו משתמשים בנתונים שלכם כדי לספק ולשפר את השירות.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "המידע שאנו אוספים",
                paragraphs: &[
                    "אנו אוספים מספר סוגי מידע למטרות שונות כדי לספק ולשפר את השירות שלנו עבורכם.",
                    "סוגי מידע נאספים:",
                ],
                list: &[
                    "נתונים אישיים: בעת השימוש בשירות שלנו, אנו עשויים לבקש מכם לספק לנו מידע אישי מזהה מסוים שניתן להשתמש בו כדי ליצור קשר או לזהות אתכם ('נתונים אישיים'). זה עשוי לכלול, בין היתר: שם פרטי ושם משפחה, כתובת דוא\"ל, מספר טלפון, שם ארגון/קליניקה, סוג פנייה (לדוגמה, גישה מוקדמת, שיחת ייעוץ, שותפות), שיטת יצירת קשר מועדפת, וכל מידע אחר שתספקו בהודעתכם.",
                    "נתוני שימוש: אנו עשויים גם לאסוף מידע כיצד השירות נגיש ומשמש ('נתוני שימוש'). נתוני שימוש אלה עשויים לכלול מידע כגון כתובת פרוטוקול אינטרנט של המחשב שלכם (לדוגמה כתובת IP), סוג דפדפן, גרסת דפדפן, הדפים של השירות שלנו שאתם מבקרים בהם, השעה והתאריך של ביקורכם, הזמן שהושקע בדפים אלה, מזהי מכשיר ייחודיים ונתונים אבחוניים אחרים.",
                    "נתונים טיפוליים (אם רלוונטי ובכפוף להסכמה): עבור שירותים הכוללים ניתוח AI של סשנים, אנו מעבדים נתוני שמע/ווידאו אך ורק לצורך מתן תובנות טיפוליות. נתונים אלה מנוקים מזיהוי ומוצפנים, ואיננו מאחסנים מידע מזהה של מטופלים. הסכמה מפורשת מתקבלת לפני עיבוד כל נתוני סשן טיפולי.",
                ],
            },
            LegalSection {
                heading: "שימוש בנתונים",
                paragraphs: &["TheraNote משתמשת בנתונים הנאספים למטרות שונות:"],
                list: &[
                    "כדי לספק ולתחזק את השירות שלנו",
                    "כדי להודיע לכם על שינויים בשירות שלנו",
                    "כדי לאפשר לכם להשתתף בתכונות אינטראקטיביות של השירות שלנו כאשר אתם בוחרים לעשות זאת",
                    "כדי לספק תמיכת לקוחות",
                    "כדי לאסוף ניתוח או מידע רב ערך כדי שנוכל לשפר את השירות שלנו",
                    "כדי לנטר את השימוש בשירות שלנו",
                    "כדי לזהות, למנוע ולטפל בבעיות טכניות",
                    "כדי לספק לכם חדשות, הצעות מיוחדות ומידע כללי אודות מוצרים, שירותים ואירועים אחרים שאנו מציעים הדומים לאלה שכבר רכשתם או ביררתם לגביהם, אלא אם כן בחרתם לא לקבל מידע כזה.",
                ],
            },
            LegalSection {
                heading: "גילוי נתונים",
                paragraphs: &["אנו עשויים לחשוף את הנתונים האישיים שלכם בתום לב כי פעולה כזו נחוצה:"],
                list: &[
                    "כדי לציית לחובה חוקית",
                    "כדי להגן ולשמור על זכויותיה או רכושה של TheraNote",
                    "כדי למנוע או לחקור עוולות אפשריות בקשר לשירות",
                    "כדי להגן על בטיחותם האישית של משתמשי השירות או הציבור",
                    "כדי להגן מפני אחריות משפטית",
                ],
            },
            LegalSection {
                heading: "אבטחת נתונים",
                paragraphs: &[
                    "אבטחת הנתונים שלכם חשובה לנו, אך זכרו שאף שיטת העברה באינטרנט, או שיטת אחסון אלקטרוני, אינה מאובטחת ב-100%. בעוד אנו שואפים להשתמש באמצעים מקובלים מסחרית כדי להגן על הנתונים האישיים שלכם, איננו יכולים להבטיח את אבטחתם המוחלטת.",
                    "אנו עומדים בתקן HIPAA ובתקני הפרטיות הישראליים. כל הנתונים מוצפנים, מעובדים בצורה מאובטחת ומאוחסנים על פי הסטנדרטים הגבוהים ביותר בתעשייה.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "זכויותיכם (GDPR/חוק הגנת הפרטיות הישראלי)",
                paragraphs: &["בהתאם למיקומכם, ייתכן שיש לכם זכויות מסוימות להגנת מידע, כולל:"],
                list: &[
                    "הזכות לגשת, לעדכן או למחוק את המידע שיש לנו עליכם.",
                    "הזכות לתיקון.",
                    "הזכות להתנגד.",
                    "הזכות להגבלה.",
                    "הזכות לניידות נתונים.",
                    "הזכות לבטל הסכמה.",
                ],
            },
            LegalSection {
                heading: "שינויים במדיניות פרטיות זו",
                paragraphs: &[
                    "אנו עשויים לעדכן את מדיניות הפרטיות שלנו מעת לעת. אנו נודיע לכם על כל שינוי על ידי פרסום מדיניות הפרטיות החדשה בדף זה.",
                    "אנו נודיע לכם באמצעות דוא\"ל ו/או הודעה בולטת בשירות שלנו, לפני שהשינוי ייכנס לתוקף ונעדכן את 'תאריך הכניסה לתוקף' בחלק העליון של מדיניות פרטיות זו.",
                    "מומלץ לבדוק מדיניות פרטיות זו מעת לעת עבור כל שינוי. שינויים במדיניות פרטיות זו נכנסים לתוקף כאשר הם מתפרסמים בדף זה.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "צרו קשר",
                paragraphs: &[
                    "אם יש לכם שאלות כלשהן לגבי מדיניות פרטיות זו, אנא צרו עמנו קשר:",
                    "באימייל: THERANOTE1@GMAIL.COM",
                ],
                list: &[],
            },
        ],
    },
    terms_of_service: LegalPage {
        title: "תנאי שימוש",
        sections: &[
            LegalSection {
                heading: "ברוכים הבאים ל-TheraNote!",
                paragraphs: &["תנאי שימוש אלה ('התנאים') מסדירים את גישתכם ושימושכם באתר, במוצרים ובשירותים של TheraNote (להלן: 'השירות'). בגישה או בשימוש בשירות, אתם מסכימים להיות כפופים לתנאים אלה ולמדיניות הפרטיות שלנו. אם אינכם מסכימים לתנאים אלה, אנא אל תשתמשו בשירות שלנו."],
                list: &[],
            },
            LegalSection {
                heading: "שימוש בשירות",
                paragraphs: &[
                    "TheraNote מספקת מערכת מבוססת בינה מלאכותית שנועדה לסייע לאנשי מקצוע בתחום בריאות הנפש בהקשבה, תיעוד והבנה של מפגשים טיפוליים. השירות מיועד לשימוש מקצועי בלבד ואינו מהווה תחליף לייעוץ רפואי מקצועי, אבחון או טיפול.",
                    "אתם מסכימים להשתמש בשירות רק למטרות חוקיות ובאופן שאינו פוגע בזכויותיו של אף אחד אחר, אינו מגביל או מונע את השימוש וההנאה שלו מהשירות.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "חשבונות משתמשים",
                paragraphs: &[
                    "כדי לגשת לתכונות מסוימות של השירות, ייתכן שתידרשו ליצור חשבון. אתם מסכימים לספק מידע מדויק, עדכני ומלא במהלך תהליך ההרשמה ולעדכן מידע כזה כדי לשמור עליו מדויק, עדכני ומלא. אתם אחראים לשמירה על הסיסמה שלכם ועל כל פעילות או פעולה תחת חשבונכם.",
                    "עליכם להודיע ל-TheraNote מייד על כל שימוש בלתי מורשה בחשבונכם או על כל הפרת אבטחה אחרת.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "פרטיות ואבטחת מידע",
                paragraphs: &[
                    "פרטיותכם חשובה לנו באופן קריטי. מדיניות הפרטיות שלנו מסבירה כיצד אנו אוספים, משתמשים ומגנים על המידע האישי שלכם ועל כל נתונים טיפוליים המעובדים באמצעות השירות שלנו. על ידי שימוש בשירות, אתם מסכימים לעיבוד כזה ואתם מצהירים כי כל הנתונים שסופקו על ידכם מדויקים.",
                    "אנו מיישמים אמצעי אבטחה חזקים, כולל הצפנה ודה-זיהוי היכן שרלוונטי, כדי להגן על הנתונים שלכם. עם זאת, אף שיטת העברה באינטרנט, או שיטת אחסון אלקטרוני, אינה מאובטחת ב-100%.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "קניין רוחני",
                paragraphs: &[
                    "השירות ותוכנו המקורי, תכונותיו ופונקציונליותו הם ויישארו רכוש בלעדי של TheraNote ושל מעניקי הרישיונות שלה. השירות מוגן על ידי חוקי זכויות יוצרים, סימני מסחר וחוקים אחרים של ישראל ושל מדינות זרות.",
                    "הסימנים המסחריים והלבוש המסחרי שלנו אינם ניתנים לשימוש בקשר למוצר או שירות כלשהו ללא הסכמה מוקדמת בכתב של TheraNote.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "טיפול בנתונים טיפוליים",
                paragraphs: &[
                    "עבור תכונות הכוללות ניתוח AI של מפגשים טיפוליים, אתם מבינים ומסכימים כי TheraNote מעבדת נתוני שמע/וידאו כדי לספק תובנות. עיבוד זה מיועד אך ורק למטרת סיוע למטפלים ושיפור השירות.",
                    "אתם האחראים הבלעדיים לקבלת כל ההסכמות הנדרשות מהמטופלים שלכם להקלטה ועיבוד נתוני המפגשים הטיפוליים שלהם באמצעות TheraNote, בהתאם לכל החוקים וההנחיות האתיות הרלוונטיות (לדוגמה, HIPAA, חוקי פרטיות ישראליים).",
                ],
                list: &[],
            },
            LegalSection {
                heading: "הגבלת אחריות",
                paragraphs: &["בשום מקרה לא יהיו TheraNote, מנהליה, עובדיה, שותפיה, סוכניה, ספקיה או חברות הבת שלה, אחראים לכל נזק עקיף, מקרי, מיוחד, תוצאתי או עונשי, לרבות, ללא הגבלה, אובדן רווחים, נתונים, שימוש, מוניטין, או הפסדים בלתי מוחשיים אחרים, הנובעים מ-(א) גישתכם או שימושכם או חוסר יכולתכם לגשת או להשתמש בשירות; (ב) כל התנהגות או תוכן של צד שלישי כלשהו בשירות; (ג) כל תוכן שהושג מהשירות; ו-(ד) גישה, שימוש או שינוי בלתי מורשים של שידוריכם או תוכנכם, בין אם מבוסס על אחריות, חוזה, עוולה (כולל רשלנות) או כל תיאוריה משפטית אחרת, בין אם הודיעו לנו על אפשרות לנזק כזה ובין אם לאו, ואפילו אם תרופה המוצגת כאן כשלה במטרתה המהותית."],
                list: &[],
            },
            LegalSection {
                heading: "דין חל",
                paragraphs: &[
                    "תנאים אלה יחולו וייפורשו בהתאם לחוקי מדינת ישראל, ללא התחשבות בהוראות ברירת הדין שלה.",
                    "כישלוננו לאכוף זכות או הוראה כלשהי מתנאים אלה לא ייחשב כוויתור על זכויות אלו. אם הוראה כלשהי מתנאים אלה תימצא בלתי תקפה או בלתי ניתנת לאכיפה על ידי בית משפט, יתר ההוראות של תנאים אלה יישארו בתוקף.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "שינויים בתנאים",
                paragraphs: &[
                    "אנו שומרים לעצמנו את הזכות, לפי שיקול דעתנו הבלעדי, לשנות או להחליף תנאים אלה בכל עת. אם מדובר בתיקון מהותי, אנו נספק הודעה של 30 יום לפחות לפני כניסתם לתוקף של תנאים חדשים כלשהם. מה מהווה שינוי מהותי ייקבע על פי שיקול דעתנו הבלעדי.",
                    "על ידי המשך גישה או שימוש בשירות שלנו לאחר כניסתם לתוקף של תיקונים כלשהם, אתם מסכימים להיות כפופים לתנאים המתוקנים. אם אינכם מסכימים לתנאים החדשים, אינכם מורשים עוד להשתמש בשירות.",
                ],
                list: &[],
            },
            LegalSection {
                heading: "צרו קשר",
                paragraphs: &[
                    "אם יש לכם שאלות כלשהן לגבי תנאים אלה, אנא צרו עמנו קשר:",
                    "באימייל: THERANOTE1@GMAIL.COM",
                ],
                list: &[],
            },
        ],
    },
    accessibility_statement: AccessibilityStatement {
        title: "הצהרת נגישות",
        intro: &[
            Span::Text("המחויבות שלנו ב-"),
            Span::Brand,
            Span::Text(" למסור פתרון נגיש לכל המטפלים מנחה אותנו לשמור על גישה שווה לכל התכנים באתר האינטרנט. אנו פועלים ברצינות כדי שהאתר יהיה נגיש לכל המשתמשים, כולל אנשים עם מוגבלויות, ומקפידים על עמידה בסטנדרטים הגבוהים ביותר של נגישות דיגיטלית."),
        ],
        commitment_heading: "המחויבות שלנו לנגישות",
        commitment: "אנו שוקדים מאמצים להבטיח את נגישות האתר לאנשים עם מוגבלויות (לרבות אנשים עם מוגבלויות ראייה), עם מחויבות עליונה לעמוד בדרישות התקינים הבינלאומיים לנגישות תכנים ברשת. מעת לעת אנו מבצעים בדיקות תקופתיות לוודא שהאתר מתאים לכלל הציבור.",
        standards_heading: "התקינים והנחיות שבהם אנו עומדים",
        standards: &[
            "תקן ישראלי ת\"י 5568 - נגישות תכני אתרי אינטרנט",
            "הנחיות WCAG 2.1 ברמת AA (Web Content Accessibility Guidelines)",
            "תקנות שוויון זכויות לאנשים עם מוגבלות (התאמות נגישות לשירות)",
        ],
        features_heading: "תכונות נגישות באתר",
        features: &[
            "תמיכה בקוראי מסך ובטכנולוגיות עזר",
            "ניווט באמצעות מקלדת בלבד",
            "תגיות alt מתאימות לכל התמונות",
            "ביאורים וכותרות מובנות במבנה היררכי",
            "ניגודיות צבעים מתאימה ובהירה",
            "תמיכה בשפות עברית ואנגלית",
            "עיצוב רספונסיבי המותאם למכשירים שונים",
            "קישורים ברורים עם תיאור משמעותי",
            "טפסים נגישים עם תוויות ברורות",
            "זמני תגובה מתאימים לכל המשתמשים",
        ],
        ongoing_heading: "המאמצים המתמשכים שלנו",
        ongoing: "אנו ממשיכים לשפר ולעדכן את הנגישות באתר על בסיס קבוע. צוותינו עובר הכשרות סדירות בנושא נגישות דיגיטלית ואנו מבצעים בדיקות תקופתיות עם מומחי נגישות כדי לוודא שהאתר עומד בסטנדרטים הנדרשים. במידה ותיתקלו בבעיות נגישות או שיש לכם הצעות לשיפור, אנא פנו אלינו.",
        contact_heading: "איך ליצור קשר בנושא נגישות",
        contact_intro: "אם נתקלתם בקושי כלשהו בגישה לתכני האתר, או שיש לכם הערות והצעות לשיפור נגישות האתר, נשמח לשמוע מכם:",
        coordinator: "שחר אפוטה - רכז נגישות",
        email_label: "דואר אלקטרוני",
        response_label: "זמני תגובה",
        response_time: "אנו מתחייבים לחזור אליכם תוך 5 ימי עבודה",
        last_updated: "הצהרת נגישות זו עודכנה לאחרונה ב:",
    },
    contact_form: ContactFormContent {
        title: "צרו קשר",
        close: "סגירה",
        name_label: "שם מלא *",
        email_label: "אימייל *",
        phone_label: "טלפון",
        org_label: "ארגון/קליניקה",
        inquiry_type_label: "סוג הפנייה",
        inquiry_types: InquiryTypeLabels {
            early_access: "בקשה לגישה מוקדמת",
            consultation: "שיחת ייעוץ",
            partnership: "שותפות",
            general: "פנייה כללית",
        },
        preferred_contact_label: "איך תעדיפו שניצור קשר?",
        contact_methods: ContactMethodLabels {
            email: "אימייל",
            phone: "טלפון",
        },
        reason_label: "ספרו לנו על הצרכים שלכם *",
        reason_placeholder: "ספרו לנו בקצרה על הצרכים שלכם במערכת שלנו...",
        submit_button: "שלח הודעה",
        submitting_button: "שולח...",
        already_submitting: "הבקשה שלך עדיין נשלחת, אנא המתינו רגע.",
        cancel_button: "ביטול",
        privacy_consent: PrivacyConsentText {
            title: "הסכמה לפרטיות ויצירת קשר",
            text: "אני מסכים/ה למדיניות הפרטיות של TheraNote ומאשר/ת יצירת קשר מצד צוות TheraNote לצורך מעקב בנוגע לפנייתי. אני מבין/ה שהמידע האישי שלי ישמש אך ורק למטרה זו ויטופל בצורה מאובטחת.",
            privacy_policy_link: "מדיניות פרטיות",
        },
        privacy_consent_required: "אנא הסכימו למדיניות הפרטיות ולהסכמת יצירת הקשר כדי להמשיך.",
        missing_field: "אנא מלאו את שדה החובה:",
        invalid_email: "אנא הזינו כתובת אימייל תקינה.",
        submit_error: "אירעה שגיאה בשליחת בקשתכם. אנא נסו שוב או צרו קשר ישירות.",
        submit_error_network: "אירעה שגיאה בשליחת בקשתכם. אנא בדקו את החיבור לאינטרנט ונסו שוב.",
        unknown_error: "אירעה שגיאה לא ידועה.",
        success_title: "תודה!",
        success_message: "קיבלנו את הודעתך ונחזור אליך בהקדם.",
    },
    accessibility_menu: AccessibilityMenuContent {
        title: "תפריט נגישות",
        trigger_label: "פתח תפריט נגישות",
        close_label: "סגור תפריט נגישות",
        reset: "איפוס הגדרות",
        statement: "הצהרת נגישות",
        contrast: "ניגודיות גבוהה",
        monochrome: "מונוכרום",
        invert: "היפוך צבעים",
        highlight_headings: "הדגשת כותרות",
        highlight_links: "הדגשת קישורים",
        readable_font: "גופן קריא",
        increase_text: "הגדלת טקסט",
        decrease_text: "הקטנת טקסט",
    },
    cookie_banner: CookieBannerContent {
        title: "אנו משתמשים בעוגיות",
        description: "אנו משתמשים בעוגיות כדי לשפר את חוויית הגלישה שלכם, לספק תוכן מותאם אישית ולנתח את התנועה באתר. בלחיצה על 'אישור הכל', אתם מסכימים לשימוש שלנו בעוגיות.",
        accept_all: "אישור הכל",
        accept_selected: "אישור נבחרות",
        reject_all: "דחיית הכל",
        settings: "הגדרות עוגיות",
        close: "סגירה",
        necessary: CategoryText {
            title: "עוגיות חיוניות",
            description: "עוגיות אלה חיוניות לתפקוד תקין של האתר ולא ניתן לכבותן.",
        },
        analytics: CategoryText {
            title: "עוגיות ניתוח",
            description: "עוגיות אלה עוזרות לנו להבין כיצד מבקרים משתמשים באתר שלנו על ידי איסוף ודיווח מידע באופן אנונימי.",
        },
        marketing: CategoryText {
            title: "עוגיות שיווק",
            description: "עוגיות אלה משמשות להצגת פרסומות רלוונטיות ולמעקב אחר יעילות קמפיינים פרסומיים.",
        },
        functional: CategoryText {
            title: "עוגיות פונקציונליות",
            description: "עוגיות אלה מאפשרות פונקציונליות משופרת והתאמה אישית, כמו זכירת העדפותיכם.",
        },
        learn_more: "קיראו עוד על עוגיות ב",
        privacy_policy: "מדיניות הפרטיות",
    },
};
