//! The demo dataset: category and post records mirroring the original
//! editorial seed.

/// Colour theme a demo category renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorThemeSeed {
    /// Blue accent palette.
    Blue,
    /// Pink accent palette.
    Pink,
    /// Yellow accent palette.
    Yellow,
    /// Green accent palette.
    Green,
}

/// Feed card size a demo post declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutSizeSeed {
    /// Default single-cell card.
    Standard,
    /// Double-width, double-height lead card.
    Hero,
    /// Double-width card.
    Wide,
    /// Single-cell card rendered with an icon instead of an image.
    Square,
}

/// A category record in the demo dataset.
#[derive(Debug, Clone, Copy)]
pub struct DemoCategory {
    /// Display name (Azerbaijani).
    pub name: &'static str,
    /// URL-safe identifier, unique across the dataset.
    pub slug: &'static str,
    /// Accent palette for cards in this category.
    pub color_theme: ColorThemeSeed,
}

/// A post record in the demo dataset.
///
/// Posts reference their category by slug because identifiers are assigned by
/// the store at apply time.
#[derive(Debug, Clone, Copy)]
pub struct DemoPost {
    /// Display title (Azerbaijani).
    pub title: &'static str,
    /// URL-safe identifier, unique across the dataset.
    pub slug: &'static str,
    /// Article body as an HTML fragment.
    pub content_html: &'static str,
    /// Cover image URL.
    pub thumbnail_url: &'static str,
    /// Free-text reading-time label, e.g. `5 dəq`.
    pub read_time: &'static str,
    /// Slug of the owning category; must exist in [`demo_categories`].
    pub category_slug: &'static str,
    /// Declared feed card size.
    pub card_size: LayoutSizeSeed,
    /// Whether the post is flagged as featured.
    pub is_featured: bool,
}

/// The four demo categories.
#[must_use]
pub fn demo_categories() -> Vec<DemoCategory> {
    vec![
        DemoCategory {
            name: "Sosial Media",
            slug: "social-media",
            color_theme: ColorThemeSeed::Blue,
        },
        DemoCategory {
            name: "Brendinq",
            slug: "branding",
            color_theme: ColorThemeSeed::Pink,
        },
        DemoCategory {
            name: "Texnologiya",
            slug: "tech",
            color_theme: ColorThemeSeed::Yellow,
        },
        DemoCategory {
            name: "Məhsul",
            slug: "product",
            color_theme: ColorThemeSeed::Blue,
        },
    ]
}

/// The six demo posts, in intended feed order (newest first once applied).
#[must_use]
pub fn demo_posts() -> Vec<DemoPost> {
    vec![
        DemoPost {
            title: "Nike-ın 'Just Do It' Kampaniyası: Bir Əfsanənin Doğuluşu",
            slug: "nike-just-do-it-campaign",
            content_html: "<h2>Giriş</h2>\n<p>1988-ci ildə Nike, idman geyimləri bazarında rəqabəti gücləndirmək üçün tarixin ən təsirli şüarlarından birini yaratdı: \"Just Do It\". Bu kampaniya sadəcə məhsul satmaqla kifayətlənmədi, həm də insanların düşüncə tərzini dəyişdi.</p>\n<h2>Strategiya</h2>\n<p>Nike, peşəkar idmançılardan gündəlik qaçışçılara qədər hər kəsə müraciət etdi. Mesaj aydın idi: Bəhanə gətirmə, sadəcə et.</p>\n<h2>Nəticə</h2>\n<p>Bu kampaniya Nike-ın bazar payını 18%-dən 43%-ə qaldırdı və brendi qlobal bir simvola çevirdi.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=2070&auto=format&fit=crop",
            read_time: "5 dəq",
            category_slug: "branding",
            card_size: LayoutSizeSeed::Hero,
            is_featured: true,
        },
        DemoPost {
            title: "Spotify Wrapped: Məlumatların Hekayəyə Çevrilməsi",
            slug: "spotify-wrapped-strategy",
            content_html: "<p>Spotify Wrapped hər il istifadəçilərə öz musiqi dinləmə vərdişləri haqqında vizual hesabat təqdim edir. Bu, istifadəçiləri öz nəticələrini sosial mediada paylaşmağa təşviq edərək, brendin pulsuz reklamını təmin edir.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1614680376593-902f74cf0d41?q=80&w=1974&auto=format&fit=crop",
            read_time: "3 dəq",
            category_slug: "social-media",
            card_size: LayoutSizeSeed::Wide,
            is_featured: false,
        },
        DemoPost {
            title: "Apple: 'Think Different' Fəlsəfəsi",
            slug: "apple-think-different",
            content_html: "<p>Apple sadəcə texnologiya satmır, o, bir həyat tərzi və status satır. 'Think Different' kampaniyası yaradıcı insanlara və dahilərə hörmət əlaməti olaraq yaradılmışdı.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1563203369-26f2e4a5ccf7?q=80&w=2070&auto=format&fit=crop",
            read_time: "4 dəq",
            category_slug: "tech",
            card_size: LayoutSizeSeed::Standard,
            is_featured: false,
        },
        DemoPost {
            title: "Duolingo: Aqressiv Marketinqin Uğuru",
            slug: "duolingo-marketing",
            content_html: "<p>Duolingo-nun bayquş simvolu TikTok-da necə viral oldu? Şirkət ənənəvi korporativ üslubdan imtina edərək, internet mədəniyyətinə uyğun, bəzən 'toksik' bir personaj yaratdı.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1626244243675-523c915f7209?q=80&w=2070&auto=format&fit=crop",
            read_time: "2 dəq",
            category_slug: "product",
            card_size: LayoutSizeSeed::Square,
            is_featured: false,
        },
        DemoPost {
            title: "Airbnb: Hekayə Danışaraq Satış Etmək",
            slug: "airbnb-storytelling",
            content_html: "<p>Airbnb istifadəçilərə ev deyil, təcrübə təklif edir. Onların marketinq strategiyası 'aid olmaq' hissi üzərində qurulub.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1496515053519-96c2e7ccb0a7?q=80&w=2070&auto=format&fit=crop",
            read_time: "6 dəq",
            category_slug: "branding",
            card_size: LayoutSizeSeed::Standard,
            is_featured: false,
        },
        DemoPost {
            title: "Coca-Cola: Milad Kampaniyaları",
            slug: "coca-cola-christmas",
            content_html: "<p>Şaxta baba obrazını Coca-Cola necə formalaşdırdı? İllərdir davam edən emosional bağ qurma strategiyası.</p>",
            thumbnail_url: "https://images.unsplash.com/photo-1622483767028-3f66f32aef97?q=80&w=2070&auto=format&fit=crop",
            read_time: "3 dəq",
            category_slug: "branding",
            card_size: LayoutSizeSeed::Standard,
            is_featured: false,
        },
    ]
}
