//! Bundled offline concept graph
//!
//! The resolution floor: always present, always self-consistent. Covers the
//! core Confucian vocabulary from the Analects, Mencius and the Book of Rites.

use super::dataset::Graph;
use super::edge::RelationshipEdge;
use super::node::{Category, ConceptNode};

/// Build the offline dataset.
pub fn dataset() -> Graph {
    Graph::new(nodes(), links())
}

fn nodes() -> Vec<ConceptNode> {
    vec![
        ConceptNode::new("ren", "仁", Category::Core)
            .with_description(
                "Benevolence, humaneness: the highest virtue, loving others and \
                 treating them as one would wish to be treated.",
            )
            .with_quote("樊迟问仁。子曰：爱人。", "《论语·颜渊》")
            .with_quote("克己复礼为仁。", "《论语·颜渊》"),
        ConceptNode::new("yi", "义", Category::Virtue)
            .with_description("Righteousness: doing what is fitting rather than what is profitable.")
            .with_quote("君子喻于义，小人喻于利。", "《论语·里仁》"),
        ConceptNode::new("li", "礼", Category::Virtue)
            .with_description(
                "Ritual propriety: the forms and norms that give social life its order.",
            )
            .with_quote("不学礼，无以立。", "《论语·季氏》"),
        ConceptNode::new("zhi", "智", Category::Virtue)
            .with_description("Wisdom: discerning right from wrong and knowing people.")
            .with_quote("知者不惑，仁者不忧，勇者不惧。", "《论语·子罕》"),
        ConceptNode::new("xin", "信", Category::Virtue)
            .with_description("Trustworthiness: keeping one's word.")
            .with_quote("人而无信，不知其可也。", "《论语·为政》"),
        ConceptNode::new("xiao", "孝", Category::Virtue)
            .with_description("Filial piety: reverence and care for one's parents.")
            .with_quote("孝弟也者，其为仁之本与！", "《论语·学而》"),
        ConceptNode::new("zhong", "忠", Category::Virtue)
            .with_description("Loyalty: doing one's utmost for others.")
            .with_quote("为人谋而不忠乎？", "《论语·学而》"),
        ConceptNode::new("shu", "恕", Category::Virtue)
            .with_description("Reciprocity: not imposing on others what one does not desire.")
            .with_quote("己所不欲，勿施于人。", "《论语·卫灵公》"),
        ConceptNode::new("junzi", "君子", Category::Ideal)
            .with_description("The exemplary person who cultivates virtue and acts with integrity.")
            .with_quote("君子坦荡荡，小人长戚戚。", "《论语·述而》"),
        ConceptNode::new("xiaoren", "小人", Category::Concept)
            .with_description("The petty person, driven by profit and conformity.")
            .with_quote("君子和而不同，小人同而不和。", "《论语·子路》"),
        ConceptNode::new("zhongyong", "中庸", Category::Principle)
            .with_description("The doctrine of the mean: balance without excess or deficiency.")
            .with_quote("中庸之为德也，其至矣乎！", "《论语·雍也》"),
        ConceptNode::new("he", "和", Category::Principle)
            .with_description("Harmony: unity that preserves difference.")
            .with_quote("礼之用，和为贵。", "《论语·学而》"),
        ConceptNode::new("zhengming", "正名", Category::Principle)
            .with_description("Rectification of names: words and roles must match reality.")
            .with_quote("名不正，则言不顺；言不顺，则事不成。", "《论语·子路》"),
        ConceptNode::new("dao", "道", Category::Concept)
            .with_description("The Way: the right course of conduct and of the world.")
            .with_quote("朝闻道，夕死可矣。", "《论语·里仁》"),
        ConceptNode::new("de", "德", Category::Concept)
            .with_description("Virtue as moral power, the Way realised in a person.")
            .with_quote("为政以德，譬如北辰，居其所而众星共之。", "《论语·为政》"),
        ConceptNode::new("tianming", "天命", Category::Concept)
            .with_description("The mandate of Heaven.")
            .with_quote("五十而知天命。", "《论语·为政》"),
        ConceptNode::new("xiushen", "修身", Category::Principle)
            .with_description("Self-cultivation, the root of ordering family and state.")
            .with_quote("自天子以至于庶人，壹是皆以修身为本。", "《礼记·大学》"),
        ConceptNode::new("xue", "学", Category::Concept)
            .with_description("Learning: study joined with practice.")
            .with_quote("学而时习之，不亦说乎？", "《论语·学而》"),
        ConceptNode::new("xingshan", "性善", Category::Concept)
            .with_description("Mencius' thesis that human nature is good.")
            .with_quote("人性之善也，犹水之就下也。", "《孟子·告子上》"),
        ConceptNode::new("datong", "大同", Category::Ideal)
            .with_description("The Great Unity: a world shared by all.")
            .with_quote("大道之行也，天下为公。", "《礼记·礼运》"),
        ConceptNode::new("ruxue", "儒家", Category::School)
            .with_description("Confucianism, the school founded on the teachings of Confucius."),
    ]
}

fn links() -> Vec<RelationshipEdge> {
    let link = |source: &str, target: &str, relationship: &str, description: &str| {
        RelationshipEdge::new(source, target, relationship).with_description(description)
    };

    vec![
        link("ren", "yi", "grounds", "Righteousness grows out of benevolence."),
        link("ren", "li", "expressed_through", "Benevolence takes outward form in ritual."),
        link("ren", "zhi", "accompanies", "The wise delight in benevolence."),
        link("ren", "xin", "accompanies", "Trust is one of the practices of benevolence."),
        link("xiao", "ren", "root_of", "Filial piety is the root of benevolence."),
        link("zhong", "ren", "path_to", "Loyalty is one half of the single thread."),
        link("shu", "ren", "path_to", "Reciprocity is the method of benevolence."),
        link("zhong", "shu", "paired_with", "Together they form the one thread of the Master's way."),
        link("yi", "li", "gives_content_to", "Ritual without righteousness is empty form."),
        link("zhi", "yi", "discerns", "Wisdom recognises what is right."),
        link("xin", "yi", "bounded_by", "A promise is kept when it accords with righteousness."),
        link("li", "he", "aims_at", "In ritual, harmony is most valued."),
        link("li", "zhengming", "orders", "Ritual keeps each role true to its name."),
        link("junzi", "ren", "embodies", "The exemplary person never departs from benevolence."),
        link("junzi", "yi", "understands", "The exemplary person understands righteousness."),
        link("xiaoren", "junzi", "contrasts_with", "The petty person is the foil of the exemplary one."),
        link("junzi", "zhongyong", "practices", "The exemplary person keeps to the mean."),
        link("zhongyong", "he", "achieves", "Balance brings harmony."),
        link("dao", "de", "manifests_as", "Virtue is the Way realised in conduct."),
        link("de", "junzi", "cultivated_by", "The exemplary person cultivates virtue."),
        link("tianming", "junzi", "known_by", "Knowing the mandate marks the exemplary person."),
        link("tianming", "dao", "mandates", "Heaven's mandate sets the Way."),
        link("xiushen", "junzi", "produces", "Self-cultivation makes the exemplary person."),
        link("xue", "xiushen", "begins", "Learning is where self-cultivation starts."),
        link("xue", "zhi", "leads_to", "Study clears away confusion."),
        link("xingshan", "ren", "seed_of", "The feeling of compassion is the sprout of benevolence."),
        link("ruxue", "ren", "centers_on", "Benevolence is the core of Confucian teaching."),
        link("ruxue", "li", "transmits", "The school preserved and taught the rites."),
        link("ruxue", "datong", "envisions", "The Book of Rites describes the Great Unity."),
        link("datong", "dao", "realizes", "When the great Way prevails, the world is shared."),
    ]
}
